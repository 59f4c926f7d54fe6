// crates/geoip-core/src/model/network.rs

//! Flat trait bundles answered by the network-centric databases.

use serde::{Deserialize, Serialize};

use crate::traits::leaf_has_data;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asn {
    pub autonomous_system_number: u32,
    pub autonomous_system_organization: String,
}

/// ASN fields plus the ISP and mobile network identifiers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Isp {
    pub autonomous_system_number: u32,
    pub autonomous_system_organization: String,
    pub isp: String,
    pub mobile_country_code: String,
    pub mobile_network_code: String,
    pub organization: String,
}

impl Isp {
    /// The ASN view of this record.
    pub fn asn(&self) -> Asn {
        Asn {
            autonomous_system_number: self.autonomous_system_number,
            autonomous_system_organization: self.autonomous_system_organization.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    /// Second-level domain associated with the network, e.g. `"example.com"`.
    pub domain: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionType {
    /// One of `"Dialup"`, `"Cable/DSL"`, `"Corporate"`, `"Cellular"`, `"Satellite"`.
    pub connection_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnonymousIp {
    pub is_anonymous: bool,
    pub is_anonymous_vpn: bool,
    pub is_hosting_provider: bool,
    pub is_public_proxy: bool,
    pub is_residential_proxy: bool,
    pub is_tor_exit_node: bool,
}

leaf_has_data!(Asn { autonomous_system_number, autonomous_system_organization });
leaf_has_data!(Isp {
    autonomous_system_number,
    autonomous_system_organization,
    isp,
    mobile_country_code,
    mobile_network_code,
    organization,
});
leaf_has_data!(Domain { domain });
leaf_has_data!(ConnectionType { connection_type });
leaf_has_data!(AnonymousIp {
    is_anonymous,
    is_anonymous_vpn,
    is_hosting_provider,
    is_public_proxy,
    is_residential_proxy,
    is_tor_exit_node,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::HasData;
    use crate::traits::assert_each_field_counts;

    #[test]
    fn every_field_counts() {
        assert_each_field_counts!(Asn {
            autonomous_system_number: 1221,
            autonomous_system_organization: "Telstra Pty Ltd".into(),
        });
        assert_each_field_counts!(Isp {
            autonomous_system_number: 1221,
            autonomous_system_organization: "Telstra Pty Ltd".into(),
            isp: "Telstra Internet".into(),
            mobile_country_code: "505".into(),
            mobile_network_code: "01".into(),
            organization: "Telstra Internet".into(),
        });
        assert_each_field_counts!(Domain { domain: "telstra.net".into() });
        assert_each_field_counts!(ConnectionType { connection_type: "Cellular".into() });
        assert_each_field_counts!(AnonymousIp {
            is_anonymous: true,
            is_anonymous_vpn: true,
            is_hosting_provider: true,
            is_public_proxy: true,
            is_residential_proxy: true,
            is_tor_exit_node: true,
        });
    }

    #[test]
    fn zero_records_have_no_data() {
        assert!(!Asn::default().has_data());
        assert!(!Isp::default().has_data());
        assert!(!Domain::default().has_data());
        assert!(!ConnectionType::default().has_data());
        assert!(!AnonymousIp::default().has_data());
    }

    #[test]
    fn populated_records_have_data() {
        assert!(Asn { autonomous_system_number: 123, ..Default::default() }.has_data());
        assert!(Isp { isp: "Comcast".into(), ..Default::default() }.has_data());
        assert!(Domain { domain: "google.com".into() }.has_data());
        assert!(ConnectionType { connection_type: "Cable/DSL".into() }.has_data());
        assert!(AnonymousIp { is_anonymous: true, ..Default::default() }.has_data());
        assert!(AnonymousIp { is_tor_exit_node: true, ..Default::default() }.has_data());
    }

    #[test]
    fn isp_projects_to_asn() {
        let isp = Isp {
            autonomous_system_number: 7922,
            autonomous_system_organization: "Comcast Cable".into(),
            isp: "Comcast".into(),
            ..Default::default()
        };
        let asn = isp.asn();
        assert_eq!(asn.autonomous_system_number, 7922);
        assert_eq!(asn.autonomous_system_organization, "Comcast Cable");
    }
}
