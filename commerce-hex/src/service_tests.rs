//! Service layer unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use commerce_types::{
        AppError, CreatePaymentRequest, CreateTransactionRequest, Payment, PaymentClient,
        PaymentClientError, PaymentRepository, PaymentResponse, Product, ProductId,
        ProductRepository, ProductRequest, RepoError, Transaction, TransactionId,
        TransactionPatch, TransactionRepository, UpdateTransactionRequest,
    };

    use crate::{PaymentService, ProductService, TransactionService};

    /// Simple in-memory repository for testing the service layer.
    pub struct MockRepo {
        products: Mutex<Vec<Product>>,
        transactions: Mutex<Vec<Transaction>>,
        payments: Mutex<Vec<Payment>>,
        fail_writes: bool,
    }

    impl MockRepo {
        pub fn new() -> Self {
            Self {
                products: Mutex::new(Vec::new()),
                transactions: Mutex::new(Vec::new()),
                payments: Mutex::new(Vec::new()),
                fail_writes: false,
            }
        }

        /// A repository whose inserts always fail.
        pub fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Self::new()
            }
        }

        fn check_writable(&self) -> Result<(), RepoError> {
            if self.fail_writes {
                return Err(RepoError::Database("disk full".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ProductRepository for MockRepo {
        async fn insert_product(&self, product: &Product) -> Result<(), RepoError> {
            self.check_writable()?;
            self.products.lock().unwrap().push(product.clone());
            Ok(())
        }

        async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepoError> {
            let products = self.products.lock().unwrap();
            Ok(products.iter().find(|p| p.id == id).cloned())
        }

        async fn list_products(&self) -> Result<Vec<Product>, RepoError> {
            Ok(self.products.lock().unwrap().clone())
        }

        async fn update_product(
            &self,
            id: ProductId,
            name: &str,
            price: f64,
        ) -> Result<bool, RepoError> {
            let mut products = self.products.lock().unwrap();
            match products.iter_mut().find(|p| p.id == id) {
                Some(p) => {
                    p.name = name.to_string();
                    p.price = price;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete_product(&self, id: ProductId) -> Result<bool, RepoError> {
            let mut products = self.products.lock().unwrap();
            let before = products.len();
            products.retain(|p| p.id != id);
            Ok(products.len() < before)
        }
    }

    #[async_trait]
    impl TransactionRepository for MockRepo {
        async fn insert_transaction(&self, tx: &Transaction) -> Result<(), RepoError> {
            self.check_writable()?;
            self.transactions.lock().unwrap().push(tx.clone());
            Ok(())
        }

        async fn get_transaction(
            &self,
            id: TransactionId,
        ) -> Result<Option<Transaction>, RepoError> {
            let txs = self.transactions.lock().unwrap();
            Ok(txs.iter().find(|t| t.id == id).cloned())
        }

        async fn list_transactions(&self) -> Result<Vec<Transaction>, RepoError> {
            let mut txs = self.transactions.lock().unwrap().clone();
            txs.sort_by(|a, b| b.date.cmp(&a.date));
            Ok(txs)
        }

        async fn update_transaction(
            &self,
            id: TransactionId,
            patch: &TransactionPatch,
        ) -> Result<bool, RepoError> {
            let mut txs = self.transactions.lock().unwrap();
            match txs.iter_mut().find(|t| t.id == id) {
                Some(t) => {
                    t.apply(patch);
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete_transaction(&self, id: TransactionId) -> Result<bool, RepoError> {
            let mut txs = self.transactions.lock().unwrap();
            let before = txs.len();
            txs.retain(|t| t.id != id);
            Ok(txs.len() < before)
        }
    }

    #[async_trait]
    impl PaymentRepository for MockRepo {
        async fn insert_payment(&self, payment: &Payment) -> Result<(), RepoError> {
            self.check_writable()?;
            self.payments.lock().unwrap().push(payment.clone());
            Ok(())
        }
    }

    /// What the stub payment service answers.
    pub enum PaymentOutcome {
        Paid(&'static str),
        Unavailable,
        Rejected(u16),
        Garbage,
    }

    /// Payment client double that counts calls.
    pub struct MockPaymentClient {
        outcome: PaymentOutcome,
        calls: AtomicUsize,
    }

    impl MockPaymentClient {
        pub fn new(outcome: PaymentOutcome) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PaymentClient for MockPaymentClient {
        async fn create_payment(
            &self,
            req: &CreatePaymentRequest,
        ) -> Result<PaymentResponse, PaymentClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcome {
                PaymentOutcome::Paid(id) => Ok(PaymentResponse {
                    id: id.to_string(),
                    amount: req.amount,
                }),
                PaymentOutcome::Unavailable => Err(PaymentClientError::Unavailable(
                    "request timed out".into(),
                )),
                PaymentOutcome::Rejected(status) => Err(PaymentClientError::Rejected {
                    status,
                    body: r#"{"error":"boom"}"#.into(),
                }),
                PaymentOutcome::Garbage => {
                    Err(PaymentClientError::InvalidResponse("expected value".into()))
                }
            }
        }
    }

    fn product_request(name: &str, price: f64) -> ProductRequest {
        ProductRequest {
            name: name.to_string(),
            price,
        }
    }

    fn transaction_request(price: f64, method: &str) -> CreateTransactionRequest {
        CreateTransactionRequest {
            product_id: ProductId::new().to_string(),
            price,
            payment_method: method.to_string(),
            payment_id: None,
        }
    }

    fn transaction_service(
        outcome: PaymentOutcome,
    ) -> TransactionService<MockRepo, MockPaymentClient> {
        TransactionService::new(MockRepo::new(), MockPaymentClient::new(outcome))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Products
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_create_then_get_product_round_trips() {
        let service = ProductService::new(MockRepo::new());

        let created = service
            .create_product(product_request("Widget", 9.99))
            .await
            .unwrap();
        let fetched = service.get_product(&created.id.to_string()).await.unwrap();

        assert_eq!(fetched.name, "Widget");
        assert_eq!(fetched.price, 9.99);
    }

    #[tokio::test]
    async fn test_create_product_validation() {
        let service = ProductService::new(MockRepo::new());

        let empty_name = service.create_product(product_request("", 1.0)).await;
        let zero_price = service.create_product(product_request("Widget", 0.0)).await;
        let negative = service.create_product(product_request("Widget", -3.0)).await;

        assert!(matches!(empty_name, Err(AppError::Validation(_))));
        assert!(matches!(zero_price, Err(AppError::Validation(_))));
        assert!(matches!(negative, Err(AppError::Validation(_))));
        assert!(service.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_product_id_is_distinct_from_missing() {
        let service = ProductService::new(MockRepo::new());

        let malformed = service.get_product("not-an-id").await.unwrap_err();
        let missing = service
            .get_product(&ProductId::new().to_string())
            .await
            .unwrap_err();

        assert!(matches!(malformed, AppError::InvalidId(_)));
        assert_eq!(malformed.to_string(), "invalid product ID");
        assert!(matches!(missing, AppError::NotFound(_)));
        assert_eq!(missing.to_string(), "product not found");
    }

    #[tokio::test]
    async fn test_update_product() {
        let service = ProductService::new(MockRepo::new());
        let created = service
            .create_product(product_request("Widget", 9.99))
            .await
            .unwrap();
        let id = created.id.to_string();

        service
            .update_product(&id, product_request("Gadget", 15.0))
            .await
            .unwrap();
        let fetched = service.get_product(&id).await.unwrap();

        assert_eq!(fetched.name, "Gadget");
        assert_eq!(fetched.price, 15.0);
    }

    #[tokio::test]
    async fn test_update_product_errors() {
        let service = ProductService::new(MockRepo::new());
        let created = service
            .create_product(product_request("Widget", 9.99))
            .await
            .unwrap();

        let invalid = service
            .update_product(&created.id.to_string(), product_request("Widget", 0.0))
            .await;
        let bad_id = service
            .update_product("nope", product_request("Widget", 1.0))
            .await;
        let missing = service
            .update_product(&ProductId::new().to_string(), product_request("Widget", 1.0))
            .await;

        assert!(matches!(invalid, Err(AppError::Validation(_))));
        assert!(matches!(bad_id, Err(AppError::InvalidId(_))));
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_product() {
        let service = ProductService::new(MockRepo::new());
        let created = service
            .create_product(product_request("Widget", 9.99))
            .await
            .unwrap();
        let id = created.id.to_string();

        service.delete_product(&id).await.unwrap();

        assert!(service.list_products().await.unwrap().is_empty());
        assert!(matches!(
            service.delete_product(&id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_product("not-an-id").await,
            Err(AppError::InvalidId(_))
        ));
    }

    #[tokio::test]
    async fn test_list_products_empty() {
        let service = ProductService::new(MockRepo::new());

        assert!(service.list_products().await.unwrap().is_empty());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transactions
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_create_transaction_uses_payment_id() {
        let service = transaction_service(PaymentOutcome::Paid("p1"));

        let tx = service
            .create_transaction(transaction_request(42.5, "card"))
            .await
            .unwrap();

        assert_eq!(tx.payment_id, "p1");
        assert_eq!(tx.price, 42.5);
        assert_eq!(tx.payment_method, "card");
        let fetched = service.get_transaction(&tx.id.to_string()).await.unwrap();
        assert_eq!(fetched, tx);
    }

    #[tokio::test]
    async fn test_create_transaction_ignores_caller_payment_id() {
        let service = transaction_service(PaymentOutcome::Paid("p1"));
        let mut req = transaction_request(10.0, "card");
        req.payment_id = Some("forged".into());

        let tx = service.create_transaction(req).await.unwrap();

        assert_eq!(tx.payment_id, "p1");
    }

    #[tokio::test]
    async fn test_create_transaction_validation_skips_payment_call() {
        let service = transaction_service(PaymentOutcome::Paid("p1"));

        let mut bad_product = transaction_request(10.0, "card");
        bad_product.product_id = "not-an-id".into();
        let bad_product = service.create_transaction(bad_product).await.unwrap_err();
        let zero_price = service
            .create_transaction(transaction_request(0.0, "card"))
            .await
            .unwrap_err();
        let no_method = service
            .create_transaction(transaction_request(10.0, ""))
            .await
            .unwrap_err();

        assert!(matches!(bad_product, AppError::InvalidId(_)));
        assert_eq!(bad_product.to_string(), "invalid product_id");
        assert!(matches!(zero_price, AppError::Validation(_)));
        assert!(matches!(no_method, AppError::Validation(_)));
        assert_eq!(service.payment_client().calls(), 0);
    }

    #[tokio::test]
    async fn test_payment_unavailable_persists_nothing() {
        let service = transaction_service(PaymentOutcome::Unavailable);

        let err = service
            .create_transaction(transaction_request(10.0, "card"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::PaymentServiceUnavailable(_)));
        assert!(service.list_transactions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_payment_rejected_persists_nothing() {
        let service = transaction_service(PaymentOutcome::Rejected(400));

        let err = service
            .create_transaction(transaction_request(10.0, "card"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::PaymentService(_)));
        assert!(err.to_string().contains("400"));
        assert!(service.list_transactions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_payment_response_persists_nothing() {
        let service = transaction_service(PaymentOutcome::Garbage);

        let err = service
            .create_transaction(transaction_request(10.0, "card"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::PaymentService(_)));
        assert!(service.list_transactions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_failure_after_payment_is_storage_error() {
        let service = TransactionService::new(
            MockRepo::failing(),
            MockPaymentClient::new(PaymentOutcome::Paid("p1")),
        );

        let err = service
            .create_transaction(transaction_request(10.0, "card"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
        // The payment went through and is not compensated.
        assert_eq!(service.payment_client().calls(), 1);
    }

    #[tokio::test]
    async fn test_malformed_transaction_id_is_distinct_from_missing() {
        let service = transaction_service(PaymentOutcome::Paid("p1"));

        let malformed = service.get_transaction("not-an-id").await.unwrap_err();
        let missing = service
            .get_transaction(&TransactionId::new().to_string())
            .await
            .unwrap_err();

        assert!(matches!(malformed, AppError::InvalidId(ref what) if what == "transaction ID"));
        assert_eq!(malformed.to_string(), "invalid transaction ID");
        assert!(matches!(missing, AppError::NotFound(_)));
        assert_eq!(missing.to_string(), "transaction not found");
    }

    #[tokio::test]
    async fn test_update_transaction_only_payment_method() {
        let service = transaction_service(PaymentOutcome::Paid("p1"));
        let tx = service
            .create_transaction(transaction_request(25.0, "card"))
            .await
            .unwrap();
        let id = tx.id.to_string();

        service
            .update_transaction(
                &id,
                UpdateTransactionRequest {
                    payment_method: "cash".into(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let fetched = service.get_transaction(&id).await.unwrap();

        assert_eq!(fetched.payment_method, "cash");
        assert_eq!(fetched.price, tx.price);
        assert_eq!(fetched.product_id, tx.product_id);
        assert_eq!(fetched.payment_id, tx.payment_id);
        assert_eq!(fetched.date, tx.date);
    }

    #[tokio::test]
    async fn test_update_transaction_zero_price_is_no_change() {
        let service = transaction_service(PaymentOutcome::Paid("p1"));
        let tx = service
            .create_transaction(transaction_request(25.0, "card"))
            .await
            .unwrap();
        let id = tx.id.to_string();

        service
            .update_transaction(
                &id,
                UpdateTransactionRequest {
                    price: 0.0,
                    payment_method: "cash".into(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(service.get_transaction(&id).await.unwrap().price, 25.0);
    }

    #[tokio::test]
    async fn test_update_transaction_errors() {
        let service = transaction_service(PaymentOutcome::Paid("p1"));
        let tx = service
            .create_transaction(transaction_request(25.0, "card"))
            .await
            .unwrap();
        let id = tx.id.to_string();

        let nothing = service
            .update_transaction(&id, UpdateTransactionRequest::default())
            .await;
        let only_payment_id = service
            .update_transaction(
                &id,
                UpdateTransactionRequest {
                    payment_id: Some("p2".into()),
                    ..Default::default()
                },
            )
            .await;
        let bad_product = service
            .update_transaction(
                &id,
                UpdateTransactionRequest {
                    product_id: "bogus".into(),
                    ..Default::default()
                },
            )
            .await;
        let negative = service
            .update_transaction(
                &id,
                UpdateTransactionRequest {
                    price: -1.0,
                    ..Default::default()
                },
            )
            .await;
        let bad_id = service
            .update_transaction(
                "not-an-id",
                UpdateTransactionRequest {
                    price: 1.0,
                    ..Default::default()
                },
            )
            .await;
        let missing = service
            .update_transaction(
                &TransactionId::new().to_string(),
                UpdateTransactionRequest {
                    price: 1.0,
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(nothing, Err(AppError::NoFields)));
        assert!(matches!(only_payment_id, Err(AppError::NoFields)));
        assert!(matches!(bad_product, Err(AppError::InvalidId(_))));
        assert!(matches!(negative, Err(AppError::Validation(_))));
        assert!(matches!(bad_id, Err(AppError::InvalidId(ref what)) if what == "transaction ID"));
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_transaction() {
        let service = transaction_service(PaymentOutcome::Paid("p1"));
        let tx = service
            .create_transaction(transaction_request(25.0, "card"))
            .await
            .unwrap();
        let id = tx.id.to_string();

        service.delete_transaction(&id).await.unwrap();

        assert!(service.list_transactions().await.unwrap().is_empty());
        let again = service.delete_transaction(&id).await.unwrap_err();
        assert_eq!(again.to_string(), "transaction not found");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Payments
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_create_payment() {
        let service = PaymentService::new(MockRepo::new());

        let payment = service
            .create_payment(CreatePaymentRequest { amount: 19.5 })
            .await
            .unwrap();

        assert_eq!(payment.amount, 19.5);
        assert_eq!(service.repo().payments.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_payment_rejects_non_positive_amount() {
        let service = PaymentService::new(MockRepo::new());

        for amount in [0.0, -5.0] {
            let result = service
                .create_payment(CreatePaymentRequest { amount })
                .await;
            assert!(matches!(result, Err(AppError::Validation(_))));
        }
        assert!(service.repo().payments.lock().unwrap().is_empty());
    }
}
