//! `rss/*`

use mosaic_qbit_types::{Payload, QbitError, RssRule};

use crate::QbitClient;
use crate::encoding::{bool_str, json_blob_spaced};
use crate::endpoints::rss;
use crate::request::{Body, Params};
use crate::transport::Transport;

impl<T: Transport> QbitClient<T> {
    /// Adds a folder. `path` is backslash-separated, e.g. `Linux\Distros`.
    pub async fn rss_add_folder(&self, path: &str) -> Result<Payload, QbitError> {
        let params = Params::new().with("path", path);
        self.send_request(rss::ADD_FOLDER, params.into()).await
    }

    /// Adds a feed, optionally under `path`.
    pub async fn rss_add_feed(&self, url: &str, path: Option<&str>) -> Result<Payload, QbitError> {
        let params = Params::new().with("url", url).with_opt("path", path);
        self.send_request(rss::ADD_FEED, params.into()).await
    }

    /// Removes a folder or feed.
    pub async fn rss_remove_item(&self, path: &str) -> Result<Payload, QbitError> {
        let params = Params::new().with("path", path);
        self.send_request(rss::REMOVE_ITEM, params.into()).await
    }

    /// Moves or renames a folder or feed.
    pub async fn rss_move_item(
        &self,
        item_path: &str,
        dest_path: &str,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with("itemPath", item_path)
            .with("destPath", dest_path);
        self.send_request(rss::MOVE_ITEM, params.into()).await
    }

    /// All folders and feeds, with their articles when `with_data` is set.
    pub async fn rss_items(&self, with_data: bool) -> Result<Payload, QbitError> {
        let params = Params::new().with("withData", bool_str(with_data));
        self.send_request(rss::ITEMS, params.into()).await
    }

    /// Marks one article, or the whole feed when `article_id` is `None`, as read.
    pub async fn rss_mark_as_read(
        &self,
        item_path: &str,
        article_id: Option<&str>,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with("itemPath", item_path)
            .with_opt("articleId", article_id);
        self.send_request(rss::MARK_AS_READ, params.into()).await
    }

    /// Refreshes a folder or feed.
    pub async fn rss_refresh_item(&self, item_path: &str) -> Result<Payload, QbitError> {
        let params = Params::new().with("itemPath", item_path);
        self.send_request(rss::REFRESH_ITEM, params.into()).await
    }

    /// Creates or replaces an auto-downloading rule. Unset fields of `rule` are left
    /// out of the `ruleDef` JSON.
    pub async fn rss_set_rule(&self, rule_name: &str, rule: &RssRule) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with("ruleName", rule_name)
            .with("ruleDef", json_blob_spaced(rule)?);
        self.send_request(rss::SET_RULE, params.into()).await
    }

    /// Renames an auto-downloading rule.
    pub async fn rss_rename_rule(
        &self,
        rule_name: &str,
        new_rule_name: &str,
    ) -> Result<Payload, QbitError> {
        let params = Params::new()
            .with("ruleName", rule_name)
            .with("newRuleName", new_rule_name);
        self.send_request(rss::RENAME_RULE, params.into()).await
    }

    /// Removes an auto-downloading rule.
    pub async fn rss_remove_rule(&self, rule_name: &str) -> Result<Payload, QbitError> {
        let params = Params::new().with("ruleName", rule_name);
        self.send_request(rss::REMOVE_RULE, params.into()).await
    }

    /// All auto-downloading rules, keyed by name.
    pub async fn rss_rules(&self) -> Result<Payload, QbitError> {
        self.send_request(rss::RULES, Body::Empty).await
    }

    /// Articles matching a rule, grouped by feed.
    pub async fn rss_matching_articles(&self, rule_name: &str) -> Result<Payload, QbitError> {
        let params = Params::new().with("ruleName", rule_name);
        self.send_request(rss::MATCHING_ARTICLES, params.into()).await
    }
}
