//! End-to-end search workflow over a scripted catalogue.
//!
//! Pages are loaded from JSON fixtures, so the same tests also exercise
//! the serde shape a wire implementation would decode into.

use chrono::{DateTime, Utc};
use cswsearch::mock::ScriptedCatalogue;
use cswsearch::{
    BoundingBox, CSW_OUTPUT_SCHEMA, ElementSet, RecordPage, SearchClient, SearchQuery, TimeRange,
    scheme,
};
use serde_json::json;

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn page_fixture(value: serde_json::Value) -> RecordPage {
    serde_json::from_value(value).unwrap()
}

#[test]
fn paged_search_collects_records_and_extracts_urls() {
    let first = page_fixture(json!({
        "summary": { "matches": 4, "returned": 3, "next_record": 4 },
        "records": [
            {
                "identifier": "no.met.adc:arctic-sst-l4",
                "title": "Arctic L4 sea surface temperature",
                "references": [
                    { "scheme": "OPeNDAP:OPeNDAP", "url": "https://thredds.met.no/thredds/dodsC/arctic-sst-l4" },
                    { "scheme": "OGC:WMS", "url": "https://thredds.met.no/thredds/wms/arctic-sst-l4" }
                ]
            },
            {
                "identifier": "no.met.adc:baltic-sst-l3",
                "references": [
                    { "scheme": "WWW:DOWNLOAD-1.0-http--download", "url": "https://thredds.met.no/thredds/fileServer/baltic-sst-l3.nc" }
                ]
            },
            {
                "identifier": "no.met.adc:norkyst800-sst",
                "references": [
                    { "scheme": "OPeNDAP:OPeNDAP", "url": "https://thredds.met.no/thredds/dodsC/norkyst800-sst" }
                ]
            }
        ]
    }));
    let second = page_fixture(json!({
        "summary": { "matches": 4, "returned": 1, "next_record": 0 },
        "records": [
            {
                "identifier": "no.met.adc:osisaf-sst-metop",
                "title": "OSI SAF Metop sea surface temperature",
                "references": [
                    { "scheme": "OPeNDAP:OPeNDAP", "url": "https://thredds.met.no/thredds/dodsC/osisaf-sst-metop" }
                ]
            }
        ]
    }));

    let catalogue = ScriptedCatalogue::new().with_page(first).with_page(second);
    let query = SearchQuery::new()
        .with_text("*sea_surface_temperature*")
        .with_time(TimeRange::new(
            ts("2025-06-05T00:00:00Z"),
            ts("2025-07-03T00:00:00Z"),
        ))
        .with_bbox(BoundingBox::new(-20.0, 60.0, 40.0, 85.0));
    let mut client = SearchClient::new(catalogue)
        .with_page_size(3)
        .with_max_records(6);

    let records = client.search(&query).unwrap();

    assert_eq!(records.len(), 4);
    assert_eq!(
        records.urls_for_scheme(scheme::OPENDAP),
        vec![
            "https://thredds.met.no/thredds/dodsC/arctic-sst-l4",
            "https://thredds.met.no/thredds/dodsC/norkyst800-sst",
            "https://thredds.met.no/thredds/dodsC/osisaf-sst-metop",
        ]
    );
    assert_eq!(
        records.urls_for_scheme(scheme::WMS),
        vec!["https://thredds.met.no/thredds/wms/arctic-sst-l4"]
    );
    assert!(records.urls_for_scheme("OGC:WCS").is_empty());
    assert_eq!(
        records.schemes(),
        vec![
            scheme::OPENDAP,
            scheme::WMS,
            scheme::HTTP_DOWNLOAD,
        ]
    );

    let catalogue = client.into_inner();
    let requests = catalogue.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.element_set == ElementSet::Full));
    assert!(requests.iter().all(|r| r.output_schema == CSW_OUTPUT_SCHEMA));
    assert!(requests.iter().all(|r| r.filtered));
    assert_eq!(requests[0].start_position, 0);
    assert_eq!(requests[1].start_position, 4);
}

#[test]
fn a_page_without_a_next_record_hint_still_pages_forward() {
    let first = page_fixture(json!({
        "summary": { "matches": 2, "returned": 1 },
        "records": [{ "identifier": "no.met.adc:a" }]
    }));
    let second = page_fixture(json!({
        "summary": { "matches": 2, "returned": 1, "next_record": 0 },
        "records": [{ "identifier": "no.met.adc:b" }]
    }));

    let catalogue = ScriptedCatalogue::new().with_page(first).with_page(second);
    let mut client = SearchClient::new(catalogue)
        .with_page_size(1)
        .with_max_records(5);

    let records = client.fetch(None).unwrap();

    assert_eq!(records.len(), 2);
    let catalogue = client.into_inner();
    let starts: Vec<usize> = catalogue
        .requests()
        .iter()
        .map(|r| r.start_position)
        .collect();
    assert_eq!(starts, vec![0, 2]);
    assert!(catalogue.requests().iter().all(|r| !r.filtered));
}
