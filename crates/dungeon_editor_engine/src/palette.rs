use serde::{Deserialize, Serialize};

use crate::TileAttributes;

/// A paintable tile definition supplied with the level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileTemplate {
    pub id: i64,
    pub name: String,
    pub character: String,
    pub color: String,
    pub background_color: String,
    pub description: String,
    pub slug: String,
    pub state: String,
    pub script: String,
    pub animate_random: bool,
    pub animate_period: Option<i32>,
    pub animate_characters: String,
    pub animate_colors: String,
    pub animate_background_colors: String,
    /// Historic templates are read-only and can't be painted
    pub historic: bool,
}

impl TileTemplate {
    pub fn attributes(&self) -> TileAttributes {
        TileAttributes {
            tile_template_id: Some(self.id),
            character: self.character.clone(),
            color: self.color.clone(),
            background_color: self.background_color.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            slug: self.slug.clone(),
            state: self.state.clone(),
            script: self.script.clone(),
            animate_random: self.animate_random,
            animate_period: self.animate_period,
            animate_characters: self.animate_characters.clone(),
            animate_colors: self.animate_colors.clone(),
            animate_background_colors: self.animate_background_colors.clone(),
        }
    }
}

/// Read-only list of templates available for painting.
#[derive(Clone, Debug, Default)]
pub struct Palette {
    templates: Vec<TileTemplate>,
}

impl Palette {
    pub fn new(templates: Vec<TileTemplate>) -> Self {
        Self { templates }
    }

    pub fn get(&self, id: i64) -> Option<&TileTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn first(&self) -> Option<&TileTemplate> {
        self.templates.first()
    }

    pub fn templates(&self) -> &[TileTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// The tile the tile painting tool paints with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveTile {
    pub attributes: TileAttributes,
    pub historic: bool,
    /// Set when the tile was picked from the personal shortlist
    pub shortlist_id: Option<i64>,
}

impl ActiveTile {
    pub fn from_template(template: &TileTemplate) -> Self {
        Self {
            attributes: template.attributes(),
            historic: template.historic,
            shortlist_id: None,
        }
    }

    pub fn from_attributes(attributes: TileAttributes) -> Self {
        Self {
            attributes,
            historic: false,
            shortlist_id: None,
        }
    }

    /// Display name with the same suffixes the palette shows.
    pub fn display_name(&self) -> String {
        let mut name = self.attributes.name.clone();
        if self.historic {
            name.push_str(" (historic)");
        }
        if self.attributes.is_custom() {
            name.push_str(" (custom)");
        }
        name
    }
}
