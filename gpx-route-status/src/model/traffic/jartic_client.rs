use super::{jartic_ops, TrafficRecord, TrafficSource};
use crate::{
    config::TrafficConfiguration,
    model::{
        geocode::PrefectureCode,
        service::{http_ops, ServiceError},
    },
};
use reqwest::blocking::Client;

/// client for the JARTIC open traffic information files.
pub struct JarticClient {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl JarticClient {
    const SERVICE: &'static str = "JARTIC";
    const TIMESTAMP_FORMAT: &'static str = "%Y%m%d%H%M%S";

    pub fn new(client: Client, conf: &TrafficConfiguration) -> JarticClient {
        JarticClient {
            client,
            base_url: conf.base_url.trim_end_matches('/').to_string(),
            user_agent: conf.user_agent.clone(),
        }
    }

    /// current data generation, requested with a cache-busting timestamp.
    pub fn target(&self) -> Result<String, ServiceError> {
        let url = format!("{}/d/traffic_info/r1/target.json", self.base_url);
        let timestamp = chrono::Local::now()
            .format(Self::TIMESTAMP_FORMAT)
            .to_string();
        let body = http_ops::get_text(
            &self.client,
            Self::SERVICE,
            &url,
            &[("_", timestamp)],
            Some(&self.user_agent),
        )?;
        jartic_ops::parse_target(&body)
    }

    pub fn prefecture_url(&self, target: &str, prefecture_code: &PrefectureCode) -> String {
        format!(
            "{}/d/traffic_info/r1/{target}/d/301/R{prefecture_code}.json",
            self.base_url
        )
    }
}

impl TrafficSource for JarticClient {
    fn traffic_records(
        &self,
        prefecture_code: &PrefectureCode,
    ) -> Result<Vec<TrafficRecord>, ServiceError> {
        let target = self.target()?;
        let url = self.prefecture_url(&target, prefecture_code);
        let body = http_ops::get_text(
            &self.client,
            Self::SERVICE,
            &url,
            &[],
            Some(&self.user_agent),
        )?;
        let records = jartic_ops::parse_traffic_geojson(&body, prefecture_code)?;
        log::debug!(
            "prefecture {prefecture_code}: {} traffic records",
            records.len()
        );
        Ok(records)
    }
}
