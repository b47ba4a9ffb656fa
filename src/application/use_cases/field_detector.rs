//! Field Model Resolver
//!
//! Picks text and binary fields for a scenario:
//! - explicit caller-supplied lists are used verbatim
//! - otherwise the scenario is matched against an ordered table of domain
//!   profiles (web flows, automotive ECU, infotainment/HMI)
//! - the first matching profile wins; no match yields an empty model

use crate::domain::field_model::FieldModel;
use crate::shared::text::{hyphens_to_spaces, normalize_scenario};

/// A single keyword test against the normalized scenario.
#[derive(Debug, Clone, Copy)]
pub enum Clause {
    /// Plain substring.
    Contains(&'static str),
    /// Substring after hyphens are turned into spaces.
    ContainsSpaced(&'static str),
    /// Every substring must be present.
    AllOf(&'static [&'static str]),
    /// First substring present and second absent.
    ContainsUnless(&'static str, &'static str),
}

impl Clause {
    fn matches(&self, scenario: &str, spaced: &str) -> bool {
        match self {
            Clause::Contains(needle) => scenario.contains(needle),
            Clause::ContainsSpaced(needle) => spaced.contains(needle),
            Clause::AllOf(needles) => needles.iter().all(|needle| scenario.contains(needle)),
            Clause::ContainsUnless(needle, excluded) => {
                scenario.contains(needle) && !scenario.contains(excluded)
            }
        }
    }
}

/// Keyword clauses and the fields they select.
#[derive(Debug, Clone, Copy)]
pub struct DomainProfile {
    pub name: &'static str,
    pub clauses: &'static [Clause],
    pub text_fields: &'static [&'static str],
    pub binary_fields: &'static [&'static str],
}

impl DomainProfile {
    /// A profile matches when any of its clauses does.
    pub fn matches(&self, scenario: &str, spaced: &str) -> bool {
        self.clauses
            .iter()
            .any(|clause| clause.matches(scenario, spaced))
    }

    pub fn field_model(&self) -> FieldModel {
        FieldModel::from_static(self.text_fields, self.binary_fields)
    }
}

use Clause::{AllOf, Contains, ContainsSpaced, ContainsUnless};

/// Ordered by priority: earlier profiles shadow later ones.
pub static DOMAIN_PROFILES: [DomainProfile; 19] = [
    DomainProfile {
        name: "login",
        clauses: &[Contains("login"), ContainsSpaced("sign in"), Contains("authenticate")],
        text_fields: &["username", "password", "otp"],
        binary_fields: &["remember_me", "show_password"],
    },
    DomainProfile {
        name: "logout",
        clauses: &[Contains("logout"), ContainsSpaced("sign out")],
        text_fields: &["session_id"],
        binary_fields: &["is_network_connected"],
    },
    DomainProfile {
        name: "checkout",
        clauses: &[Contains("checkout"), Contains("payment"), Contains("purchase")],
        text_fields: &["shipping_address", "zipcode", "card_number", "cvv"],
        binary_fields: &["save_address", "accept_terms"],
    },
    DomainProfile {
        name: "registration",
        clauses: &[Contains("registration"), ContainsSpaced("sign up"), Contains("signup")],
        text_fields: &["full_name", "email", "password", "confirm_password"],
        binary_fields: &["accept_terms", "subscribe_newsletter"],
    },
    DomainProfile {
        name: "password_reset",
        clauses: &[
            Contains("reset password"),
            Contains("forgot password"),
            Contains("password_reset"),
        ],
        text_fields: &["email", "otp", "new_password"],
        binary_fields: &["remember_device"],
    },
    DomainProfile {
        name: "add_to_cart",
        clauses: &[Contains("add to cart"), ContainsSpaced("add_to_cart")],
        text_fields: &["product_id", "quantity"],
        binary_fields: &["is_logged_in"],
    },
    DomainProfile {
        name: "api",
        clauses: &[Contains("api"), Contains("endpoint"), Contains("request")],
        text_fields: &["payload", "auth_token"],
        binary_fields: &["is_authenticated"],
    },
    DomainProfile {
        name: "ecu",
        clauses: &[
            Contains("ecu"),
            Contains("firmware"),
            Contains("diagnostic"),
            ContainsUnless("can", "door"),
        ],
        text_fields: &["request_id", "checksum", "ecu_id"],
        binary_fields: &["is_vehicle_running", "is_ignition_on"],
    },
    DomainProfile {
        name: "hmi",
        clauses: &[Contains("hmi"), Contains("ui"), Contains("user interface")],
        text_fields: &["screen_id", "language", "theme", "brightness_level"],
        binary_fields: &["is_touch_enabled", "is_night_mode"],
    },
    DomainProfile {
        name: "audio_routing",
        clauses: &[
            AllOf(&["audio", "routing"]),
            AllOf(&["audio", "source"]),
            AllOf(&["audio", "output"]),
        ],
        text_fields: &["audio_source", "output_target", "volume_level", "balance_setting"],
        binary_fields: &["is_nav_prompt_active", "is_phone_call_active"],
    },
    DomainProfile {
        name: "bluetooth",
        clauses: &[Contains("bluetooth"), Contains("bt ")],
        text_fields: &[
            "phone_bucket",
            "bt_profile",
            "reconnect_trigger",
            "power_state",
            "hu_state",
        ],
        binary_fields: &["is_device_paired_before", "is_auto_reconnect_enabled"],
    },
    DomainProfile {
        name: "wifi",
        clauses: &[Contains("wifi"), Contains("wi-fi"), Contains("hotspot")],
        text_fields: &["ssid", "wifi_password", "signal_strength", "client_profile"],
        binary_fields: &["is_hotspot_enabled", "is_client_mode_enabled"],
    },
    DomainProfile {
        name: "navigation",
        clauses: &[
            Contains("navigation"),
            Contains("nav "),
            Contains("gnss"),
            Contains("route"),
        ],
        text_fields: &["start_location", "destination", "route_type", "traffic_condition"],
        binary_fields: &["is_gps_locked", "is_online_services_available"],
    },
    DomainProfile {
        name: "vehicle_integration",
        clauses: &[
            Contains("vehicle integration"),
            ContainsUnless("can", "door"),
            ContainsUnless("lin", "door"),
        ],
        text_fields: &["signal_name", "signal_value", "bus_load"],
        binary_fields: &["is_ignition_on", "is_vehicle_moving"],
    },
    DomainProfile {
        name: "ota",
        clauses: &[
            Contains("ota"),
            Contains("over-the-air"),
            Contains("software update"),
        ],
        text_fields: &["package_version", "package_size", "current_sw_version"],
        binary_fields: &["is_wifi_connected", "is_battery_ok"],
    },
    DomainProfile {
        name: "performance",
        clauses: &[
            Contains("performance"),
            Contains("latency"),
            Contains("response time"),
        ],
        text_fields: &["operation_type", "data_volume", "concurrent_sessions"],
        binary_fields: &["is_logging_enabled", "is_debug_mode"],
    },
    DomainProfile {
        name: "security",
        clauses: &[
            Contains("security"),
            Contains("access control"),
            Contains("authorization"),
        ],
        text_fields: &["user_role", "auth_method", "resource_name"],
        binary_fields: &["is_mfa_enabled", "is_account_locked"],
    },
    DomainProfile {
        name: "robustness",
        clauses: &[
            Contains("robustness"),
            Contains("power cycle"),
            Contains("fault"),
            Contains("stress"),
        ],
        text_fields: &["fault_type", "recovery_attempts", "test_duration"],
        binary_fields: &["is_network_available", "is_backup_path_available"],
    },
    DomainProfile {
        name: "door_warning",
        clauses: &[Contains("door warning"), AllOf(&["door", "warning"])],
        text_fields: &["door_signal", "vehicle_speed", "voltage_profile"],
        binary_fields: &["is_ignition_on", "cluster_active"],
    },
];

/// First profile in table order whose clauses match the scenario.
pub fn detect_profile(scenario: &str) -> Option<&'static DomainProfile> {
    let normalized = normalize_scenario(scenario);
    let spaced = hyphens_to_spaces(&normalized);
    DOMAIN_PROFILES
        .iter()
        .find(|profile| profile.matches(&normalized, &spaced))
}

/// Auto-detected fields for a scenario; empty when nothing matches.
pub fn detect_fields_for_scenario(scenario: &str) -> FieldModel {
    detect_profile(scenario)
        .map(DomainProfile::field_model)
        .unwrap_or_default()
}

/// Explicit lists win when either is non-empty; otherwise detect from the scenario.
pub fn resolve_field_model(
    scenario: &str,
    text_fields: Option<&[String]>,
    binary_fields: Option<&[String]>,
) -> FieldModel {
    let text_fields = text_fields.map(<[String]>::to_vec).unwrap_or_default();
    let binary_fields = binary_fields.map(<[String]>::to_vec).unwrap_or_default();

    if text_fields.is_empty() && binary_fields.is_empty() {
        detect_fields_for_scenario(scenario)
    } else {
        FieldModel::new(text_fields, binary_fields)
    }
}
