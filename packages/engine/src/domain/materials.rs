use serde::{Deserialize, Serialize};

pub type MaterialIndex = u8;

pub const MAT_GRANITE: MaterialIndex = 0;
pub const MAT_MARBLE: MaterialIndex = 1;
pub const MAT_OBSIDIAN: MaterialIndex = 2;
pub const MAT_SANDSTONE: MaterialIndex = 3;

pub const MATERIAL_COUNT: usize = 4;

/// Rock material. Fixed catalog, never extended at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Granite,
    Marble,
    Obsidian,
    Sandstone,
}

/// Static properties of one catalog entry.
#[derive(Clone, Copy, Debug)]
pub struct MaterialProps {
    pub key: &'static str,
    /// Mass per unit of radius
    pub density: f32,
    /// Fraction of velocity kept after hitting a wall
    pub bounce: f32,
    /// 0xRRGGBB
    pub color: u32,
}

static MATERIAL_DATA: [MaterialProps; MATERIAL_COUNT] = [
    MaterialProps { key: "granite", density: 2.7, bounce: 0.6, color: 0x8A8580 },
    MaterialProps { key: "marble", density: 2.6, bounce: 0.5, color: 0xE8E4DA },
    MaterialProps { key: "obsidian", density: 2.4, bounce: 0.7, color: 0x2A2630 },
    MaterialProps { key: "sandstone", density: 2.2, bounce: 0.4, color: 0xC9A66B },
];

impl Material {
    pub const ALL: [Material; MATERIAL_COUNT] = [
        Material::Granite,
        Material::Marble,
        Material::Obsidian,
        Material::Sandstone,
    ];

    #[inline]
    pub fn index(self) -> MaterialIndex {
        match self {
            Material::Granite => MAT_GRANITE,
            Material::Marble => MAT_MARBLE,
            Material::Obsidian => MAT_OBSIDIAN,
            Material::Sandstone => MAT_SANDSTONE,
        }
    }

    pub fn from_index(index: MaterialIndex) -> Option<Material> {
        Material::ALL.get(index as usize).copied()
    }

    #[inline]
    pub fn props(self) -> &'static MaterialProps {
        &MATERIAL_DATA[self.index() as usize]
    }

    #[inline]
    pub fn density(self) -> f32 {
        self.props().density
    }

    #[inline]
    pub fn bounce(self) -> f32 {
        self.props().bounce
    }

    #[inline]
    pub fn color(self) -> u32 {
        self.props().color
    }

    pub fn key(self) -> &'static str {
        self.props().key
    }
}

#[derive(Serialize)]
struct MaterialManifestEntry {
    index: MaterialIndex,
    key: &'static str,
    density: f32,
    bounce: f32,
    color: u32,
}

/// JSON array describing the catalog, for UI legends.
pub fn manifest_json() -> String {
    let entries: Vec<MaterialManifestEntry> = Material::ALL
        .iter()
        .map(|m| {
            let props = m.props();
            MaterialManifestEntry {
                index: m.index(),
                key: props.key,
                density: props.density,
                bounce: props.bounce,
                color: props.color,
            }
        })
        .collect();
    serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
}
