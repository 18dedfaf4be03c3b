use chrono::NaiveDate;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn city(name: &str) -> CityConfig {
    CityConfig {
        name: name.to_string(),
    }
}

fn cities_file() -> CitiesFile {
    CitiesFile {
        cities: vec![
            city("Costco Denver"),
            city("Costco Tampa Bay"),
            city("Costco Las Vegas"),
        ],
    }
}

fn run_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 5)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

fn page(city: &str, avg: &str, rows: &[(&str, &str)]) -> String {
    let rows: String = rows
        .iter()
        .map(|(store, wait)| format!("<tr><td>{store}</td><td>{wait}</td></tr>"))
        .collect();
    format!(
        "<html><body>\
         <div class=\"rpt_plan\"><div class=\"rpt_recurrence\"><strong>{city}</strong></div></div>\
         <div class=\"rpt_price\">{avg}</div>\
         <table>{rows}</table>\
         </body></html>"
    )
}

#[test]
fn select_cities_without_filter_returns_all() {
    let file = cities_file();
    let selected = select_cities(&file, None).unwrap();
    assert_eq!(selected.len(), 3);
}

#[test]
fn select_cities_with_filter_returns_match() {
    let file = cities_file();
    let selected = select_cities(&file, Some("tampa bay")).unwrap();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].name, "Costco Tampa Bay");
}

#[test]
fn select_cities_with_unknown_filter_fails() {
    let file = cities_file();
    let err = select_cities(&file, Some("Boise")).unwrap_err();
    assert!(err.to_string().contains("Boise"), "{err}");
}

#[tokio::test]
async fn collect_records_skips_failed_cities_and_keeps_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/costco-denver/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page(
            "Denver",
            "12min",
            &[("Store A", "8min"), ("Store B", "15min")],
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/place/costco-tampa-bay/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/place/costco-las-vegas/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page(
            "Las Vegas",
            "6min",
            &[("Store C", "2min")],
        )))
        .mount(&server)
        .await;

    let client = WaitTimeClient::new(5, "waitwatch-test/0.1", 0, 0).unwrap();
    let file = cities_file();
    let cities = select_cities(&file, None).unwrap();
    let base_url = format!("{}/place", server.uri());

    let records = collect_records(&client, &cities, &base_url, 0, &run_time()).await;

    let names: Vec<&str> = records.iter().map(CityWaitRecord::city_name).collect();
    assert_eq!(names, vec!["Denver", "Las Vegas"]);

    let rows = waitwatch_scraper::flatten_records(&records).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].city_name, "Las Vegas");
    assert_eq!(rows[2].location_wait, 2);
}

#[tokio::test]
async fn collect_records_skips_pages_with_unknown_layout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&server)
        .await;

    let client = WaitTimeClient::new(5, "waitwatch-test/0.1", 0, 0).unwrap();
    let file = cities_file();
    let cities = select_cities(&file, Some("denver")).unwrap();

    let records =
        collect_records(&client, &cities, &format!("{}/place", server.uri()), 0, &run_time())
            .await;

    assert!(records.is_empty());
}
