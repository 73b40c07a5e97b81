use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use tracing::debug;
use zonewatch_domain::{DomainError, Nameserver};

/// The parts of an NS response the lookup cares about.
#[derive(Debug, Clone)]
pub struct NsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// NS targets in answer order, duplicates kept
    pub nameservers: Vec<Nameserver>,
}

impl NsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    pub fn is_server_error(&self) -> bool {
        matches!(
            self.rcode,
            ResponseCode::ServFail | ResponseCode::Refused | ResponseCode::NotImp
        )
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<NsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let nameservers: Vec<Nameserver> = message
            .answers()
            .iter()
            .filter_map(|record| match record.data() {
                RData::NS(ns) => Some(Nameserver::new(ns.to_utf8())),
                _ => None,
            })
            .collect();

        debug!(
            rcode = ?message.response_code(),
            nameservers = nameservers.len(),
            truncated = message.truncated(),
            "NS response parsed"
        );

        Ok(NsResponse {
            id: message.id(),
            rcode: message.response_code(),
            truncated: message.truncated(),
            nameservers,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
