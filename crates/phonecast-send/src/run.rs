use crate::content::Content;
use crate::deliver::Deliver;
use crate::error::Result;
use crate::pacing::{Pacing, Sleeper};
use phonecast_core::PhoneAddress;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sending,
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipientOutcome {
    pub address: PhoneAddress,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SendReport {
    pub outcomes: Vec<RecipientOutcome>,
}

impl SendReport {
    pub fn sent(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.ok).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.sent()
    }

    pub fn as_map(&self) -> BTreeMap<&str, bool> {
        self.outcomes
            .iter()
            .map(|outcome| (outcome.address.as_str(), outcome.ok))
            .collect()
    }
}

/// Delivers `content` to each address in order, one attempt each.
///
/// A failed recipient is recorded and the loop moves on. Only a failure to
/// prepare the deliverer aborts the run.
pub fn send_all<D, S, F>(
    deliverer: &mut D,
    addresses: &[PhoneAddress],
    content: &Content,
    pacing: &Pacing,
    sleeper: &mut S,
    mut observer: F,
) -> Result<SendReport>
where
    D: Deliver + ?Sized,
    S: Sleeper + ?Sized,
    F: FnMut(&PhoneAddress, &DeliveryStatus),
{
    let mut report = SendReport::default();
    if addresses.is_empty() {
        return Ok(report);
    }

    deliverer.prepare()?;
    sleeper.sleep(pacing.startup);

    let total = addresses.len();
    for (index, address) in addresses.iter().enumerate() {
        let last = index + 1 == total;
        observer(address, &DeliveryStatus::Sending);

        match deliverer.deliver(address, content) {
            Ok(link) => {
                if last {
                    sleeper.sleep(pacing.final_settle);
                }
                info!(
                    recipient = %address,
                    position = index + 1,
                    total,
                    kind = content.kind().label(),
                    "delivered"
                );
                observer(address, &DeliveryStatus::Sent);
                report.outcomes.push(RecipientOutcome {
                    address: address.clone(),
                    ok: true,
                    link: Some(link.to_string()),
                    error: None,
                });
                if !last {
                    sleeper.sleep(pacing.between);
                }
            }
            Err(err) => {
                let message = err.to_string();
                warn!(recipient = %address, error = %message, "delivery failed");
                observer(address, &DeliveryStatus::Failed(message.clone()));
                report.outcomes.push(RecipientOutcome {
                    address: address.clone(),
                    ok: false,
                    link: None,
                    error: Some(message),
                });
                if !last {
                    sleeper.sleep(pacing.after_failure);
                }
            }
        }
    }

    Ok(report)
}
