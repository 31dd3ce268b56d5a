//! Message bundles: the translated strings for one resolved locale.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::locale::ResolvedLocale;

/// Failure to produce a bundle for an otherwise valid locale.
/// Fatal for the render that needed it; never a fallback trigger.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("no message bundle for locale '{locale}'")]
    NotFound { locale: String },

    #[error("failed to read message bundle for locale '{locale}': {source}")]
    Io {
        locale: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed message bundle for locale '{locale}': {source}")]
    Parse {
        locale: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Message files nest strings under namespaces: `{"Header": {"logo": "..."}}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum MessageNode {
    Text(String),
    Group(BTreeMap<String, MessageNode>),
}

/// Parses a message file and flattens it to dotted keys (`Header.logo`).
pub fn parse_messages(locale: &str, json: &str) -> Result<HashMap<String, String>, BundleError> {
    let root: BTreeMap<String, MessageNode> =
        serde_json::from_str(json).map_err(|source| BundleError::Parse {
            locale: locale.to_string(),
            source,
        })?;

    let mut flat = HashMap::new();
    for (key, node) in root {
        flatten_into(&mut flat, key, node);
    }
    Ok(flat)
}

fn flatten_into(out: &mut HashMap<String, String>, prefix: String, node: MessageNode) {
    match node {
        MessageNode::Text(text) => {
            out.insert(prefix, text);
        }
        MessageNode::Group(children) => {
            for (key, child) in children {
                flatten_into(out, format!("{prefix}.{key}"), child);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct MessageBundle {
    locale: ResolvedLocale,
    messages: Arc<HashMap<String, String>>,
}

impl MessageBundle {
    pub fn new(locale: ResolvedLocale, messages: Arc<HashMap<String, String>>) -> Self {
        MessageBundle { locale, messages }
    }

    pub fn from_json(locale: ResolvedLocale, json: &str) -> Result<Self, BundleError> {
        let messages = parse_messages(locale.as_str(), json)?;
        Ok(MessageBundle::new(locale, Arc::new(messages)))
    }

    pub fn locale(&self) -> &ResolvedLocale {
        &self.locale
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Lookup scoped to one namespace, mirroring how pages ask for their strings.
    pub fn translator<'a>(&'a self, namespace: &'a str) -> Translator<'a> {
        Translator {
            bundle: self,
            namespace,
        }
    }
}

#[derive(Clone, Copy)]
pub struct Translator<'a> {
    bundle: &'a MessageBundle,
    namespace: &'a str,
}

impl<'a> Translator<'a> {
    /// Missing keys render as their full dotted key.
    pub fn t(&self, key: &str) -> Cow<'a, str> {
        let full_key = format!("{}.{key}", self.namespace);
        match self.bundle.get(&full_key) {
            Some(text) => Cow::Borrowed(text),
            None => {
                debug!(locale = %self.bundle.locale(), key = %full_key, "Missing translation");
                Cow::Owned(full_key)
            }
        }
    }
}
