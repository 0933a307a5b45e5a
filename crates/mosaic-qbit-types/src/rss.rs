//! RSS auto-downloading rule definition.

use serde::{Deserialize, Serialize};

/// Definition of an RSS auto-downloading rule, sent as the `ruleDef` JSON blob of
/// `rss/setRule`. Fields left as `None` are stripped before encoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RssRule {
    /// Whether the rule is enabled.
    pub enabled: Option<bool>,
    /// Substring or regex the article title must contain.
    pub must_contain: Option<String>,
    /// Substring or regex the article title must not contain.
    pub must_not_contain: Option<String>,
    /// Treat the match strings as regular expressions.
    pub use_regex: Option<bool>,
    /// Episode filter definition.
    pub episode_filter: Option<String>,
    /// Enable the smart episode filter.
    pub smart_filter: Option<bool>,
    /// Episodes already matched by the smart filter.
    pub previously_matched_episodes: Option<Vec<String>>,
    /// Feed URLs the rule applies to.
    pub affected_feeds: Option<Vec<String>>,
    /// Ignore subsequent matches for this many days.
    pub ignore_days: Option<i64>,
    /// The last time the rule matched.
    pub last_match: Option<String>,
    /// Add matched torrents paused.
    pub add_paused: Option<bool>,
    /// Category assigned to matched torrents.
    pub assigned_category: Option<String>,
    /// Save path for matched torrents.
    pub save_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_wire_names() {
        let rule = RssRule {
            must_contain: Some("1080p".into()),
            affected_feeds: Some(vec!["http://example.org/feed".into()]),
            ..Default::default()
        };
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["mustContain"], "1080p");
        assert_eq!(value["affectedFeeds"][0], "http://example.org/feed");
    }

    #[test]
    fn decodes_server_rules() {
        let rule: RssRule = serde_json::from_str(
            r#"{"enabled":false,"mustContain":"x","ignoreDays":0,"addPaused":null}"#,
        )
        .unwrap();
        assert_eq!(rule.enabled, Some(false));
        assert_eq!(rule.ignore_days, Some(0));
        assert_eq!(rule.add_paused, None);
    }
}
