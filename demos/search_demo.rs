use anyhow::Result;
use chrono::{Duration, Utc};
use cswsearch::mock::ScriptedCatalogue;
use cswsearch::{
    BoundingBox, Record, RecordPage, ResultSummary, SearchClient, SearchQuery, TimeRange, scheme,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Run with RUST_LOG=debug to watch the paging loop.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Demo program that drives the search workflow against a scripted
    // catalogue. Swap in your own `Catalogue` implementation to search a
    // live endpoint.
    let catalogue = scripted_catalogue();

    let now = Utc::now();
    let query = SearchQuery::new()
        .with_text("*sea_surface_temperature*")
        .with_time(TimeRange::new(now - Duration::days(30), now))
        .with_bbox(BoundingBox::new(-20.0, 60.0, 40.0, 85.0))
        .with_relation("overlaps");

    let mut client = SearchClient::new(catalogue)
        .with_page_size(3)
        .with_max_records(6);
    let records = client.search(&query)?;

    println!("{} records:", records.len());
    for record in records.iter() {
        match &record.title {
            Some(title) => println!("  {}  ({})", record.identifier, title),
            None => println!("  {}", record.identifier),
        }
    }

    for tag in records.schemes() {
        println!();
        println!("{tag}:");
        for url in records.urls_for_scheme(tag) {
            println!("  {url}");
        }
    }

    Ok(())
}

fn scripted_catalogue() -> ScriptedCatalogue {
    let first = RecordPage::new(
        ResultSummary {
            matches: 5,
            returned: 3,
            next_record: Some(4),
        },
        vec![
            Record::new("no.met.adc:arctic-sst-l4")
                .with_title("Arctic L4 sea surface temperature")
                .with_reference(
                    scheme::OPENDAP,
                    "https://thredds.met.no/thredds/dodsC/arctic-sst-l4",
                )
                .with_reference(
                    scheme::WMS,
                    "https://thredds.met.no/thredds/wms/arctic-sst-l4",
                ),
            Record::new("no.met.adc:baltic-sst-l3")
                .with_title("Baltic L3 sea surface temperature")
                .with_reference(
                    scheme::OPENDAP,
                    "https://thredds.met.no/thredds/dodsC/baltic-sst-l3",
                )
                .with_reference(
                    scheme::HTTP_DOWNLOAD,
                    "https://thredds.met.no/thredds/fileServer/baltic-sst-l3.nc",
                ),
            Record::new("no.met.adc:norkyst800-sst")
                .with_title("NorKyst-800 surface temperature")
                .with_reference(
                    scheme::OPENDAP,
                    "https://thredds.met.no/thredds/dodsC/norkyst800-sst",
                ),
        ],
    );
    let second = RecordPage::new(
        ResultSummary {
            matches: 5,
            returned: 2,
            next_record: Some(0),
        },
        vec![
            Record::new("no.met.adc:osisaf-sst-metop")
                .with_title("OSI SAF Metop sea surface temperature")
                .with_reference(
                    scheme::HTTP_DOWNLOAD,
                    "https://thredds.met.no/thredds/fileServer/osisaf-sst-metop.nc",
                ),
            Record::new("no.met.adc:barents25-sst")
                .with_title("Barents-2.5 surface temperature")
                .with_reference(
                    scheme::WMS,
                    "https://thredds.met.no/thredds/wms/barents25-sst",
                )
                .with_reference(
                    scheme::OPENDAP,
                    "https://thredds.met.no/thredds/dodsC/barents25-sst",
                ),
        ],
    );
    ScriptedCatalogue::new().with_page(first).with_page(second)
}
