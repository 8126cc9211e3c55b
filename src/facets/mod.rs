//! Known Shodan facet names
//!
//! This catalog only feeds the `--list` output. Queries never validate
//! against it: an unknown facet is passed through to the service, which
//! decides for itself whether it is valid.

/// Facet names Shodan is known to aggregate by
pub const KNOWN_FACETS: &[&str] = &[
    "asn",
    "bitcoin.ip",
    "bitcoin.ip_count",
    "bitcoin.port",
    "bitcoin.user_agent",
    "bitcoin.version",
    "city",
    "cloud.provider",
    "cloud.region",
    "cloud.service",
    "country",
    "cpe",
    "device",
    "domain",
    "has_screenshot",
    "hash",
    "http.component",
    "http.component_category",
    "http.dom_hash",
    "http.favicon.hash",
    "http.headers_hash",
    "http.html_hash",
    "http.robots_hash",
    "http.server_hash",
    "http.status",
    "http.title",
    "http.title_hash",
    "http.waf",
    "ip",
    "isp",
    "link",
    "mongodb.database.name",
    "ntp.ip",
    "ntp.ip_count",
    "ntp.more",
    "ntp.port",
    "org",
    "os",
    "port",
    "postal",
    "product",
    "redis.key",
    "region",
    "rsync.module",
    "screenshot.hash",
    "screenshot.label",
    "snmp.contact",
    "snmp.location",
    "snmp.name",
    "ssh.cipher",
    "ssh.fingerprint",
    "ssh.hassh",
    "ssh.mac",
    "ssh.type",
    "ssl.alpn",
    "ssl.cert.alg",
    "ssl.cert.expired",
    "ssl.cert.extension",
    "ssl.cert.fingerprint",
    "ssl.cert.issuer.cn",
    "ssl.cert.pubkey.bits",
    "ssl.cert.pubkey.type",
    "ssl.cert.serial",
    "ssl.cert.subject.cn",
    "ssl.chain_count",
    "ssl.cipher.bits",
    "ssl.cipher.name",
    "ssl.cipher.version",
    "ssl.ja3s",
    "ssl.jarm",
    "ssl.version",
    "state",
    "tag",
    "telnet.do",
    "telnet.dont",
    "telnet.option",
    "telnet.will",
    "telnet.wont",
    "uptime",
    "version",
    "vuln",
    "vuln.verified",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_sorted_and_unique() {
        let mut sorted = KNOWN_FACETS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, KNOWN_FACETS);
    }

    #[test]
    fn test_default_cli_facet_is_known() {
        assert!(KNOWN_FACETS.contains(&"ip"));
    }
}
