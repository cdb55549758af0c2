//! Compile a small inline GeoNames sample without touching the network.
//!
//! Run with: `cargo run --example compile_sample`

use geonames_core::{
    compile, parse_text, render, CompileOptions, CompiledDataset, DatasetKind, OutputDocument,
    OutputFormat, Result,
};

const COUNTRIES: &str = "#ISO\tISO3\tISO-Numeric\tfips\tCountry\n\
CH\tCHE\t756\tSZ\tSwitzerland\n\
DE\tDEU\t276\tGM\tGermany\n";

const REGIONS: &str = "code\tname\tascii\tgeonameid\n\
CH.ZG\tZug\tZug\t2657907\n\
DE.02\tBavaria\tBavaria\t2951839\n";

const CITIES: &str = "geonameid\tname\tascii\talt\tlat\tlng\tclass\tcode\tcc\tcc2\tadmin1\n\
2657908\tZug\tZug\t\t47.17\t8.51\tP\tPPLA\tCH\t\tZG\n\
2867714\tMunich\tMunich\t\t48.13743\t11.57549\tP\tPPLA\tDE\t\t02\n";

fn main() -> Result<()> {
    println!("=== geonames-rs sample ===\n");

    for (label, options) in [
        ("default", CompileOptions::default()),
        (
            "--include-ids --exclude-locations",
            CompileOptions {
                include_ids: true,
                exclude_locations: true,
            },
        ),
    ] {
        let datasets: Vec<CompiledDataset> = [
            (DatasetKind::Countries, COUNTRIES),
            (DatasetKind::Regions, REGIONS),
            (DatasetKind::Cities, CITIES),
        ]
        .into_iter()
        .map(|(kind, text)| compile(kind, &parse_text(text), &options))
        .collect::<Result<_>>()?;

        println!("--- {label} ---");
        println!(
            "{}\n",
            render(&OutputDocument::Combined(&datasets), OutputFormat::Js)?
        );
    }

    Ok(())
}
