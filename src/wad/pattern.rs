/// File extensions recognised as loadable packages. Matching is case-sensitive.
pub const WAD_EXTENSIONS: [&str; 3] = ["pk3", "wad", "kart"];

/// How a file name is tested against [`WAD_EXTENSIONS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// The name must end with `.<ext>`.
    #[default]
    Suffix,
    /// The name matches if `.<ext>` appears anywhere in it, so `foo.pk3backup`
    /// and `maps.wad.old` are accepted too.
    Anywhere,
}

impl MatchMode {
    /// Check whether `name` looks like a package file.
    pub fn matches(self, name: &str) -> bool {
        match self {
            MatchMode::Suffix => WAD_EXTENSIONS.iter().any(|ext| {
                name.strip_suffix(ext)
                    .is_some_and(|stem| stem.ends_with('.'))
            }),
            MatchMode::Anywhere => name.match_indices('.').any(|(dot, _)| {
                let rest = &name[dot + 1..];
                WAD_EXTENSIONS.iter().any(|ext| rest.starts_with(ext))
            }),
        }
    }
}
