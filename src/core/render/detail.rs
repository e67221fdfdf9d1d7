use crate::core::catalog::Catalog;
use crate::core::i18n::Localizer;
use crate::models::Item;

use super::card::chips;

/// Structured piece of an item's long description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DescriptionBlock {
    /// Colon-terminated line
    Heading(String),
    Paragraph(String),
    /// Consecutive `-` lines, marker stripped
    List(Vec<String>),
}

/// Immersive detail view of one item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailPage {
    pub item_id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub content_url: String,
    pub back_label: String,
    pub fullscreen_label: String,
    pub chips: Vec<String>,
    pub description: Vec<DescriptionBlock>,
    pub controls_heading: String,
    pub controls: String,
}

pub(super) fn build(item: &Item, catalog: &Catalog, i18n: &Localizer) -> DetailPage {
    DetailPage {
        item_id: item.id.clone(),
        title: item.title.clone(),
        thumbnail_url: item.thumbnail_url.clone(),
        content_url: item.content_url.clone(),
        back_label: i18n.translate("backToGames"),
        fullscreen_label: i18n.translate("fullScreen"),
        chips: chips(item, catalog, i18n),
        description: parse_description(&item.long_description),
        controls_heading: i18n.translate("controls"),
        controls: item.controls.clone(),
    }
}

/// Split free text into headings, paragraphs and bullet lists.
///
/// Line classification uses the trimmed line: a leading `-` makes a bullet,
/// a trailing `:` a heading, anything else non-blank a paragraph. Blank
/// lines are dropped.
pub fn parse_description(text: &str) -> Vec<DescriptionBlock> {
    let mut blocks = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(bullet) = line.strip_prefix('-') {
            let bullet = bullet.trim().to_string();
            match blocks.last_mut() {
                Some(DescriptionBlock::List(items)) => items.push(bullet),
                _ => blocks.push(DescriptionBlock::List(vec![bullet])),
            }
        } else if line.ends_with(':') {
            blocks.push(DescriptionBlock::Heading(line.to_string()));
        } else {
            blocks.push(DescriptionBlock::Paragraph(line.to_string()));
        }
    }
    blocks
}
