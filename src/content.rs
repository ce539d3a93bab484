use gloo_net::http::Request;
use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("response was not valid JSON: {0}")]
    Decode(String),
}

/// Fetches the shared page payload.
pub async fn fetch_page_data() -> Result<Value, FetchError> {
    let response = Request::get(&config::page_data_url())
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    response
        .json::<Value>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// A display item read from one key of the page payload.
pub trait SectionItem: DeserializeOwned {
    const KEY: &'static str;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Achievement {
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl SectionItem for Achievement {
    const KEY: &'static str = "achievementsList";
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Brand {
    pub image: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl SectionItem for Brand {
    const KEY: &'static str = "brandList";
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaqEntry {
    #[serde(rename = "faq_que")]
    pub question: String,
    #[serde(rename = "faq_ans")]
    pub answer: String,
}

impl SectionItem for FaqEntry {
    const KEY: &'static str = "faqList";
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Innovation {
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub bg_color: Option<String>,
}

impl SectionItem for Innovation {
    const KEY: &'static str = "innovationList";
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl SectionItem for Project {
    const KEY: &'static str = "onlinePresenceList";
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WebResultTag {
    pub name: String,
    pub image: String,
}

impl SectionItem for WebResultTag {
    const KEY: &'static str = "WebResultTagList";
}

/// One section's slice of the payload.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionData<T> {
    Loading,
    Ready(Vec<T>),
    Absent,
}

impl<T: SectionItem> SectionData<T> {
    /// Validates `T::KEY` of the payload. A missing, null or non-array
    /// key is `Absent`; items that fail to parse are dropped.
    pub fn extract(payload: &Value) -> Self {
        let list = match payload.get(T::KEY) {
            None | Some(Value::Null) => return SectionData::Absent,
            Some(Value::Array(list)) => list,
            Some(other) => {
                warn!("{} is not a list (got {}), skipping section", T::KEY, other);
                return SectionData::Absent;
            }
        };

        let items = list
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match T::deserialize(item) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    warn!("Dropping {}[{}]: {}", T::KEY, index, e);
                    None
                }
            })
            .collect();
        SectionData::Ready(items)
    }

    /// Folds a fetch outcome into section data. Errors end as `Absent`.
    pub fn resolve(fetched: Result<Value, FetchError>) -> Self {
        match fetched {
            Ok(payload) => Self::extract(&payload),
            Err(e) => {
                error!("Error fetching {}: {}", T::KEY, e);
                SectionData::Absent
            }
        }
    }
}

impl<T> SectionData<T> {
    /// Items to render; empty while loading or when absent.
    pub fn items(&self) -> &[T] {
        match self {
            SectionData::Ready(items) => items,
            SectionData::Loading | SectionData::Absent => &[],
        }
    }

    pub fn is_loaded(&self) -> bool {
        !matches!(self, SectionData::Loading)
    }
}

/// Fetches the payload once on mount and keeps this section's slice.
#[hook]
pub fn use_section_data<T>() -> UseStateHandle<SectionData<T>>
where
    T: SectionItem + 'static,
{
    let data = use_state(|| SectionData::<T>::Loading);
    {
        let data = data.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    data.set(SectionData::resolve(fetch_page_data().await));
                });
                || ()
            },
            (),
        );
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn faq_payload_yields_typed_entries() {
        let payload = json!({ "faqList": [{ "faq_que": "Q1", "faq_ans": "A1" }] });
        let faq = SectionData::<FaqEntry>::extract(&payload);
        assert_eq!(
            faq,
            SectionData::Ready(vec![FaqEntry {
                question: "Q1".into(),
                answer: "A1".into(),
            }])
        );
    }

    #[test]
    fn missing_null_or_wrong_shape_is_absent() {
        assert_eq!(SectionData::<Brand>::extract(&json!({})), SectionData::Absent);
        assert_eq!(
            SectionData::<Brand>::extract(&json!({ "brandList": null })),
            SectionData::Absent
        );
        assert_eq!(
            SectionData::<Brand>::extract(&json!({ "brandList": { "image": "a.png" } })),
            SectionData::Absent
        );
        assert_eq!(SectionData::<Brand>::extract(&json!([1, 2])), SectionData::Absent);
    }

    #[test]
    fn malformed_items_are_dropped_not_fatal() {
        let payload = json!({
            "onlinePresenceList": [
                { "title": "Atlas", "image": "/images/atlas.png", "link": "https://atlas.example" },
                { "title": "No image" },
                "garbage",
                { "title": "Beacon", "image": "/images/beacon.png" }
            ]
        });
        let projects = SectionData::<Project>::extract(&payload);
        let titles: Vec<&str> = projects.items().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Atlas", "Beacon"]);
        assert_eq!(projects.items()[1].link, None);
    }

    #[test]
    fn each_section_reads_only_its_own_key() {
        let payload = json!({
            "WebResultTagList": [{ "name": "Rust", "image": "/icons/rust.svg" }],
            "innovationList": [{ "title": "Web Development", "bg_color": "#0f172a" }],
            "achievementsList": [{ "title": "Site of the Day", "year": "2025" }]
        });
        assert_eq!(SectionData::<WebResultTag>::extract(&payload).items().len(), 1);
        assert_eq!(SectionData::<Innovation>::extract(&payload).items()[0].image, None);
        assert_eq!(
            SectionData::<Achievement>::extract(&payload).items()[0].year.as_deref(),
            Some("2025")
        );
        assert_eq!(SectionData::<FaqEntry>::extract(&payload), SectionData::Absent);
    }

    #[test]
    fn failed_fetches_end_absent() {
        for err in [
            FetchError::Network("offline".into()),
            FetchError::Status(503),
            FetchError::Decode("eof".into()),
        ] {
            let data = SectionData::<FaqEntry>::resolve(Err(err));
            assert_eq!(data, SectionData::Absent);
            assert!(data.items().is_empty());
            assert!(data.is_loaded());
        }
        assert!(!SectionData::<FaqEntry>::Loading.is_loaded());
    }

    #[test]
    fn fetch_errors_describe_themselves() {
        assert_eq!(
            FetchError::Status(404).to_string(),
            "server answered with status 404"
        );
    }
}
