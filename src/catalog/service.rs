use std::collections::{HashMap, HashSet};

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::catalog::CatalogError;
use crate::clients::CatalogClient;
use crate::domain::CatalogProduct;
use crate::messages::CatalogRequest;

/// In-memory product catalog service.
///
/// Stands in for the separate product-catalog deployment behind the same
/// request/response contract: a batch of ids in, the matched snapshots
/// out, and an error naming every unknown id.
pub struct CatalogService {
    receiver: mpsc::Receiver<CatalogRequest>,
    products: HashMap<u32, CatalogProduct>,
}

impl CatalogService {
    pub fn new(
        buffer_size: usize,
        products: Vec<CatalogProduct>,
    ) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        };
        (service, CatalogClient::new(sender))
    }

    #[instrument(name = "catalog_service", skip(self))]
    pub async fn run(mut self) {
        info!(products = self.products.len(), "Catalog service starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::ValidateProducts {
                    product_ids,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.handle_validate(product_ids));
                }
            }
        }
        info!("Catalog service stopped");
    }

    #[instrument(skip(self))]
    fn handle_validate(
        &self,
        product_ids: Vec<u32>,
    ) -> Result<Vec<CatalogProduct>, CatalogError> {
        debug!("Processing validate_products request");

        let mut seen = HashSet::new();
        let mut matched = Vec::new();
        let mut missing = Vec::new();
        for id in product_ids {
            if !seen.insert(id) {
                continue;
            }
            match self.products.get(&id) {
                Some(product) => matched.push(product.clone()),
                None => missing.push(id),
            }
        }

        if missing.is_empty() {
            info!(matched = matched.len(), "Products validated");
            Ok(matched)
        } else {
            warn!(missing = ?missing, "Validation failed, unknown products");
            Err(CatalogError::UnknownProducts(missing))
        }
    }
}
