/// Lookup key for user-typed names: lowercase, with whitespace, `-` and `_`
/// removed, so `"flow_rate"` and `"Flow Rate"` compare equal.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_and_case_are_ignored() {
        assert_eq!(normalize_name("Flow Rate"), "flowrate");
        assert_eq!(normalize_name("flow_rate"), normalize_name("FLOW-RATE"));
        assert_eq!(normalize_name(" Reynolds  Number "), "reynoldsnumber");
        assert_eq!(normalize_name("ΔT"), "δt");
    }
}
