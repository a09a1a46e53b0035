use super::{OverpassQuery, RoadRefSource};
use crate::{
    config::OverpassConfiguration,
    model::service::{http_ops, ServiceError},
};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::HashMap;

pub struct OverpassClient {
    client: Client,
    interpreter_url: String,
}

#[derive(Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Deserialize)]
struct OverpassElement {
    #[serde(default)]
    tags: HashMap<String, String>,
}

impl OverpassClient {
    const SERVICE: &'static str = "Overpass";

    pub fn new(client: Client, conf: &OverpassConfiguration) -> OverpassClient {
        OverpassClient {
            client,
            interpreter_url: conf.interpreter_url.clone(),
        }
    }

    pub fn run_query(&self, query: &OverpassQuery) -> Result<String, ServiceError> {
        let params = [("data", query.to_string())];
        http_ops::get_text(
            &self.client,
            Self::SERVICE,
            &self.interpreter_url,
            &params,
            None,
        )
    }
}

impl RoadRefSource for OverpassClient {
    fn way_refs(&self, road_name: &str) -> Result<Vec<String>, ServiceError> {
        let body = self.run_query(&OverpassQuery::ways_named(road_name))?;
        parse_way_refs(&body)
    }
}

/// `ref` tags of the elements of an Overpass JSON response, in response order.
pub fn parse_way_refs(body: &str) -> Result<Vec<String>, ServiceError> {
    let response: OverpassResponse = http_ops::decode_json(OverpassClient::SERVICE, body)?;
    let refs = response
        .elements
        .into_iter()
        .filter_map(|mut e| e.tags.remove("ref"))
        .collect();
    Ok(refs)
}
