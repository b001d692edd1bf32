/// A named shortcut for a news query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderPreset {
    pub name: &'static str,
    /// Query sent upstream. Blank means no filter (top headlines in general).
    pub query: &'static str,
}

pub const PROVIDER_PRESETS: &[ProviderPreset] = &[
    ProviderPreset {
        name: "General",
        query: "",
    },
    ProviderPreset {
        name: "AWS",
        query: "AWS",
    },
    ProviderPreset {
        name: "Azure",
        query: "Azure",
    },
    ProviderPreset {
        name: "Cloudflare",
        query: "Cloudflare",
    },
    ProviderPreset {
        name: "Fastly",
        query: "Fastly",
    },
    ProviderPreset {
        name: "Google Cloud",
        query: "Google Cloud",
    },
];

/// Look up a preset's query by name, ignoring ASCII case.
#[must_use]
pub fn preset_query(name: &str) -> Option<&'static str> {
    PROVIDER_PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .map(|p| p.query)
}
