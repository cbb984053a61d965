use serde::{Deserialize, Serialize};

/// Name given to layers painted by the line draw tool.
pub const LINE_POINT_NAME: &str = "line-point";

/// The visual and behavioural attributes of a tile.
///
/// Empty strings mean "none"/"inherit". The animation lists are comma separated
/// and only passed through, the animation ticker lives outside of the editor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileAttributes {
    pub tile_template_id: Option<i64>,
    pub character: String,
    pub color: String,
    pub background_color: String,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub state: String,
    pub script: String,
    pub animate_random: bool,
    pub animate_period: Option<i32>,
    pub animate_characters: String,
    pub animate_colors: String,
    pub animate_background_colors: String,
}

impl TileAttributes {
    /// A one-off tile showing `character` in the given colors.
    pub fn custom(character: impl Into<String>, color: impl Into<String>, background_color: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            color: color.into(),
            background_color: background_color.into(),
            ..Default::default()
        }
    }

    pub fn is_custom(&self) -> bool {
        self.tile_template_id.is_none()
    }

    pub fn is_line_point(&self) -> bool {
        self.name == LINE_POINT_NAME
    }

    pub fn is_animated(&self) -> bool {
        !self.animate_characters.is_empty() || !self.animate_colors.is_empty() || !self.animate_background_colors.is_empty()
    }

    /// Attributes the flood fill compares: template identity and both colors.
    pub fn fill_key(&self) -> (Option<i64>, &str, &str) {
        (self.tile_template_id, self.color.as_str(), self.background_color.as_str())
    }

    /// Whether a map tile counts as "the same tile" as `other` for highlighting.
    /// Template tiles match by id, custom tiles by character, script and state.
    pub fn same_tile(&self, other: &TileAttributes) -> bool {
        match (self.tile_template_id, other.tile_template_id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.character == other.character && self.script == other.script && self.state == other.state,
            _ => false,
        }
    }
}

/// Submission status of a layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerStatus {
    /// Loaded from the level and not touched since.
    #[default]
    Unchanged,
    /// Painted onto a previously empty slot.
    New,
    /// A loaded layer whose attributes were modified.
    Changed,
    /// A loaded layer that was erased.
    Deleted,
}

/// One tile occupying one z-index of one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    pub z_index: i32,
    pub attributes: TileAttributes,
    status: LayerStatus,
    is_placeholder: bool,
    from_level: bool,
}

impl Layer {
    /// A layer that came with the level data.
    pub fn loaded(z_index: i32, attributes: TileAttributes) -> Self {
        Self {
            z_index,
            attributes,
            status: LayerStatus::Unchanged,
            is_placeholder: false,
            from_level: true,
        }
    }

    /// An empty stand-in occupying an otherwise unused z slot.
    pub fn placeholder(z_index: i32) -> Self {
        Self {
            z_index,
            attributes: TileAttributes::default(),
            status: LayerStatus::Unchanged,
            is_placeholder: true,
            from_level: false,
        }
    }

    pub fn status(&self) -> LayerStatus {
        self.status
    }

    pub fn is_placeholder(&self) -> bool {
        self.is_placeholder
    }

    pub fn is_deleted(&self) -> bool {
        self.status == LayerStatus::Deleted
    }

    /// Not deleted and not a placeholder.
    pub fn is_live(&self) -> bool {
        !self.is_placeholder && !self.is_deleted()
    }

    pub fn is_from_level(&self) -> bool {
        self.from_level
    }

    pub fn is_line_point(&self) -> bool {
        self.is_live() && self.attributes.is_line_point()
    }

    /// Records a modification. Placeholders become new tiles, new tiles stay
    /// new, everything else (including erased level tiles) becomes changed.
    pub(crate) fn touch(&mut self) {
        if self.is_placeholder {
            self.is_placeholder = false;
            self.status = LayerStatus::New;
        } else if self.status != LayerStatus::New {
            self.status = LayerStatus::Changed;
        }
    }

    pub(crate) fn mark_deleted(&mut self) {
        self.status = LayerStatus::Deleted;
    }
}
