/// Identification of a use case (a guided workflow spanning several entities)
pub trait UseCaseMetadata {
    /// Use case index (e.g. "u501")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "viability_wizard")
    fn usecase_name() -> &'static str;

    /// Title shown in menus and tabs
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name "u501_viability_wizard", also the tab key
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
