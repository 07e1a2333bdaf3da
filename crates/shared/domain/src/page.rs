//! The optional page configuration document.
//!
//! Every field is optional. A missing fragment means "leave the static markup alone";
//! unknown fields are ignored so that documents written for other guides still load.

use serde::{Deserialize, Deserializer};
use std::fmt;

/// Reads an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Option::unwrap_or_default)
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub meta: Option<Meta>,
    pub brand: Option<Brand>,
    pub hero: Option<Hero>,
    pub keywords: Option<Vec<String>>,
    pub explain: Option<Explain>,
    pub tabs: Option<Tabs>,
    pub examples: Option<Examples>,
    pub routine: Option<Routine>,
    pub legal: Option<Legal>,
    pub audio: Option<Audio>,
}

impl PageConfig {
    /// `true` when no fragment is present.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "themeColor")]
    pub theme_color: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub logo: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub lead: Option<String>,
    pub image: Option<Image>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Image {
    pub src: Option<String>,
    pub alt: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Explain {
    pub title: Option<String>,
    pub blocks: Option<Vec<ExplainBlock>>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExplainBlock {
    pub heading: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub paragraphs: Vec<String>,
    pub hint: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Tabs {
    pub tabs: Option<Vec<TabDef>>,
    pub panels: Option<Vec<PanelDef>>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TabDef {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PanelDef {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    /// Raw-HTML list items. Takes precedence over `html`.
    pub items: Option<Vec<String>>,
    pub html: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Examples {
    pub items: Option<Vec<ExampleItem>>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExampleItem {
    pub title: Option<String>,
    pub desc: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Routine {
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<RoutineItem>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub tip: Option<String>,
}

/// A routine step: either a bare description or a structured entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RoutineItem {
    Plain(String),
    Detailed {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        desc: Option<String>,
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        icon: Option<String>,
    },
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Legal {
    pub year: Option<Year>,
    pub email: Option<String>,
}

/// Copyright year as written in the document; both `2025` and `"2024–2025"` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Audio {
    pub src: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub sources: Option<Vec<AudioSource>>,
    pub cta_idle: Option<String>,
    pub cta_alt: Option<String>,
    pub cta_playing: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AudioSource {
    #[serde(deserialize_with = "null_as_default")]
    pub src: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl Audio {
    /// Resolved source list: a single `src` wins over `sources`.
    pub fn resolved_sources(&self, default_type: &str) -> Vec<AudioSource> {
        if let Some(src) = self.src.as_deref().filter(|s| !s.is_empty()) {
            return vec![AudioSource {
                src: src.to_owned(),
                kind: Some(self.kind.clone().unwrap_or_else(|| default_type.to_owned())),
            }];
        }
        self.sources
            .iter()
            .flatten()
            .map(|s| AudioSource {
                src: s.src.clone(),
                kind: Some(s.kind.clone().unwrap_or_else(|| default_type.to_owned())),
            })
            .collect()
    }
}
