//! BPF filter builders for 802.1X capture

use h3cauth_core::MacAddr;

/// 802.1X (EAPOL) filter
pub fn dot1x_filter() -> String {
    "ether proto 0x888e".to_string()
}

/// Filter for specific source MAC address
pub fn src_mac_filter(mac: MacAddr) -> String {
    format!("ether src {}", mac)
}

/// Combine multiple filters with AND logic
pub fn combine_filters(filters: &[&str]) -> String {
    if filters.is_empty() {
        return String::new();
    }

    filters
        .iter()
        .map(|f| format!("({})", f))
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Negate a filter
pub fn not_filter(filter: &str) -> String {
    format!("not ({})", filter)
}

/// EAPOL frames not sent by `local`, used until the authenticator is known
pub fn initial_filter(local: MacAddr) -> String {
    combine_filters(&[&dot1x_filter(), &not_filter(&src_mac_filter(local))])
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCAL: MacAddr = MacAddr([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]);

    #[test]
    fn test_dot1x_filter() {
        assert_eq!(dot1x_filter(), "ether proto 0x888e");
    }

    #[test]
    fn test_src_mac_filter() {
        assert_eq!(src_mac_filter(LOCAL), "ether src 02:00:00:00:00:01");
    }

    #[test]
    fn test_combine_filters() {
        assert_eq!(combine_filters(&[]), "");
        assert_eq!(combine_filters(&["arp"]), "(arp)");
        assert_eq!(
            combine_filters(&["ether proto 0x888e", "vlan"]),
            "(ether proto 0x888e) and (vlan)"
        );
    }

    #[test]
    fn test_initial_filter_excludes_local() {
        assert_eq!(
            initial_filter(LOCAL),
            "(ether proto 0x888e) and (not (ether src 02:00:00:00:00:01))"
        );
    }
}
