use passforge::CharacterClass;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub hide: bool,
    pub no_enforce: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub seed: Option<u64>,
    /// Explicit class switches, in the order given.
    pub classes: Vec<(CharacterClass, bool)>,
}
