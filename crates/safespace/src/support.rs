//! Static directory of support services shown alongside results.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportContact {
    pub name: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub hours: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportService {
    pub title: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub contact: SupportContact,
    pub description: &'static str,
}

impl SupportService {
    /// Phone number reduced to its digits, suitable for a `tel:` link.
    pub fn dial_number(&self) -> String {
        self.contact
            .phone
            .chars()
            .filter(char::is_ascii_digit)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyNotice {
    pub title: &'static str,
    pub message: &'static str,
    pub hotline: &'static str,
}

pub const EMERGENCY_NOTICE: EmergencyNotice = EmergencyNotice {
    title: "Emergency Support",
    message: "If you're in immediate danger or having suicidal thoughts, please call emergency services or the National Crisis Hotline immediately.",
    hotline: "988",
};

pub const SUPPORT_SERVICES: [SupportService; 4] = [
    SupportService {
        title: "Campus Counseling Center",
        kind: "Professional Support",
        contact: SupportContact {
            name: "Dr. Sarah Johnson",
            phone: "+1 (555) 123-4567",
            email: "counseling@campus.edu",
            hours: "Mon-Fri: 9AM-5PM, Sat: 10AM-2PM",
        },
        description: "Free, confidential counseling services for students",
    },
    SupportService {
        title: "National Crisis Hotline",
        kind: "Crisis Support",
        contact: SupportContact {
            name: "24/7 Helpline",
            phone: "988 (US)",
            email: "support@crisistextline.org",
            hours: "Available 24/7",
        },
        description: "Immediate support during mental health crises",
    },
    SupportService {
        title: "Peer Support Network",
        kind: "Community Support",
        contact: SupportContact {
            name: "Support Group Coordinator",
            phone: "+1 (555) 234-5678",
            email: "peers@supportnetwork.org",
            hours: "Tue & Thu: 7PM-8:30PM",
        },
        description: "Connect with others going through similar experiences",
    },
    SupportService {
        title: "Mental Health Clinic",
        kind: "Professional Support",
        contact: SupportContact {
            name: "Dr. Michael Chen",
            phone: "+1 (555) 345-6789",
            email: "appointments@mentalhealthclinic.org",
            hours: "Mon-Fri: 8AM-6PM, Weekend by appointment",
        },
        description: "Long-term therapy and psychiatric services",
    },
];

/// Directory payload: emergency notice first, then the services.
#[derive(Debug, Clone, Serialize)]
pub struct SupportDirectory {
    pub emergency: EmergencyNotice,
    pub services: Vec<SupportServiceView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupportServiceView {
    #[serde(flatten)]
    pub service: SupportService,
    pub dial: String,
}

pub fn support_directory() -> SupportDirectory {
    SupportDirectory {
        emergency: EMERGENCY_NOTICE,
        services: SUPPORT_SERVICES
            .iter()
            .map(|service| SupportServiceView {
                service: *service,
                dial: service.dial_number(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dial_numbers_keep_digits_only() {
        assert_eq!(SUPPORT_SERVICES[0].dial_number(), "15551234567");
        assert_eq!(SUPPORT_SERVICES[1].dial_number(), "988");
    }

    #[test]
    fn directory_serializes_flattened_services() {
        let value = serde_json::to_value(support_directory()).expect("serialize");
        assert_eq!(value["emergency"]["hotline"], "988");
        assert_eq!(value["services"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["services"][2]["title"], "Peer Support Network");
        assert_eq!(value["services"][2]["type"], "Community Support");
        assert_eq!(value["services"][2]["dial"], "15552345678");
    }
}
