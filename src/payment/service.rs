use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::clients::PaymentClient;
use crate::domain::{PaymentSession, PaymentSessionRequest};
use crate::messages::PaymentRequest;
use crate::payment::PaymentError;

/// In-memory payment service.
///
/// Stands in for the payment deployment: issues a session descriptor for
/// an order's named line items. Holds no state between requests.
pub struct PaymentService {
    receiver: mpsc::Receiver<PaymentRequest>,
}

impl PaymentService {
    pub fn new(buffer_size: usize, currency: String) -> (Self, PaymentClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        (Self { receiver }, PaymentClient::new(sender, currency))
    }

    #[instrument(name = "payment_service", skip(self))]
    pub async fn run(mut self) {
        info!("Payment service starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                PaymentRequest::CreateSession {
                    session,
                    respond_to,
                } => {
                    let _ = respond_to.send(handle_create_session(session));
                }
            }
        }
        info!("Payment service stopped");
    }
}

#[instrument(skip(session), fields(order_id = %session.order_id))]
fn handle_create_session(
    session: PaymentSessionRequest,
) -> Result<PaymentSession, PaymentError> {
    if session.items.is_empty() {
        return Err(PaymentError::Rejected(
            "a payment session requires at least one item".to_string(),
        ));
    }

    let amount: Decimal = session
        .items
        .iter()
        .map(|item| item.price * Decimal::from(item.quantity))
        .sum();
    let id = Uuid::new_v4();
    info!(session_id = %id, amount = %amount, "Payment session opened");
    Ok(PaymentSession {
        id,
        order_id: session.order_id,
        currency: session.currency,
        amount,
        url: format!("https://payments.example.com/session/{id}"),
    })
}
