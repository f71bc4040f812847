/// Generate client methods with oneshot channel boilerplate and
/// automatic tracing.
///
/// A closed or dropped channel surfaces as the error type's
/// `Unavailable` variant: from the caller's side an unreachable service
/// task is indistinguishable from an unreachable remote service.
#[macro_export]
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::Unavailable("service channel closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::Unavailable("service dropped the request".to_string()))?
            }
        }
    };
}
