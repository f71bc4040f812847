use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::{OrderWithProducts, PaymentItem, PaymentSession, PaymentSessionRequest};
use crate::messages::PaymentRequest;
use crate::payment::PaymentError;

/// Client for the payment service.
///
/// Builds the session request from a persisted order with resolved item
/// names; the settlement currency is fixed at construction.
#[derive(Clone)]
pub struct PaymentClient {
    sender: mpsc::Sender<PaymentRequest>,
    currency: String,
}

impl PaymentClient {
    pub(crate) fn new(sender: mpsc::Sender<PaymentRequest>, currency: String) -> Self {
        Self { sender, currency }
    }

    #[instrument(skip(self, order), fields(order_id = %order.order.id))]
    pub async fn create_payment_session(
        &self,
        order: &OrderWithProducts,
    ) -> Result<PaymentSession, PaymentError> {
        debug!("Sending request");
        let session = PaymentSessionRequest {
            order_id: order.order.id,
            currency: self.currency.clone(),
            items: order
                .items
                .iter()
                .map(|item| PaymentItem {
                    name: item.name.clone(),
                    price: item.price,
                    quantity: item.quantity,
                })
                .collect(),
        };

        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PaymentRequest::CreateSession {
                session,
                respond_to,
            })
            .await
            .map_err(|_| PaymentError::Unavailable("service channel closed".to_string()))?;

        response
            .await
            .map_err(|_| PaymentError::Unavailable("service dropped the request".to_string()))?
    }
}
