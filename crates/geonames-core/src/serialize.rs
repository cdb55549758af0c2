// crates/geonames-core/src/serialize.rs
use crate::error::Result;
use crate::options::OutputFormat;
use serde::Serialize;

/// Prefix of JS output. No space before the JSON: consumers match on the exact text.
pub const JS_EXPORT_PREFIX: &str = "export default";

/// Most compact JSON rendering: no whitespace, `,` and `:` separators.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// `export default{...}`
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(format!("{JS_EXPORT_PREFIX}{}", to_json(value)?))
}

pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Js => to_js(value),
        OutputFormat::Json => to_json(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CityEntries, CityRow, CompiledDataset, OutputDocument};
    use std::collections::BTreeMap;

    fn sample() -> Vec<CompiledDataset> {
        vec![
            CompiledDataset::Countries(BTreeMap::from([
                ("CH".to_string(), "Switzerland".to_string()),
                ("LI".to_string(), "Liechtenstein".to_string()),
            ])),
            CompiledDataset::Regions(BTreeMap::from([(
                "CH.ZG".to_string(),
                "Zug".to_string(),
            )])),
            CompiledDataset::Cities(CityEntries::KeyedRows(BTreeMap::from([(
                3041563,
                CityRow {
                    name: "Zug".into(),
                    region: "ZG".into(),
                    country: "CH".into(),
                    location: Some((47.17, 8.0)),
                },
            )]))),
        ]
    }

    #[test]
    fn json_is_compact() {
        let datasets = sample();
        let text = to_json(&OutputDocument::Combined(&datasets)).unwrap();
        assert_eq!(
            text,
            concat!(
                r#"{"countries":{"CH":"Switzerland","LI":"Liechtenstein"},"#,
                r#""regions":{"CH.ZG":"Zug"},"#,
                r#""cities":{"3041563":["Zug","ZG","CH",47.17,8.0]}}"#
            )
        );
    }

    #[test]
    fn js_is_prefix_plus_json() {
        let datasets = sample();
        for dataset in &datasets {
            let doc = OutputDocument::Single(dataset);
            let js = render(&doc, OutputFormat::Js).unwrap();
            let json = render(&doc, OutputFormat::Json).unwrap();
            assert_eq!(js, format!("export default{json}"));
        }
    }

    #[test]
    fn json_round_trips_to_the_compiled_value() {
        let datasets = sample();
        let doc = OutputDocument::Combined(&datasets);
        let parsed: serde_json::Value = serde_json::from_str(&to_json(&doc).unwrap()).unwrap();
        assert_eq!(parsed, serde_json::to_value(doc).unwrap());

        for dataset in &datasets {
            let parsed: serde_json::Value =
                serde_json::from_str(&to_json(dataset).unwrap()).unwrap();
            assert_eq!(parsed, serde_json::to_value(dataset).unwrap());
        }
    }

    #[test]
    fn non_ascii_names_are_emitted_verbatim() {
        let text = to_json(&BTreeMap::from([("AX", "Åland")])).unwrap();
        assert_eq!(text, r#"{"AX":"Åland"}"#);
    }
}
