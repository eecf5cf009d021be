use chrono::NaiveDate;

use crate::DEFAULT_CUSTOMER_ID;
use crate::catalog;
use crate::domain::customer::Customer;
use crate::domain::inquiry::{NewInquiry, OfferArtifact};
use crate::domain::position::NewPosition;
use crate::forms::offer::OfferForm;
use crate::ids;
use crate::renderer::{OfferDocument, OfferLine, OfferRenderer};
use crate::repository::{CustomerReader, CustomerWriter, InquiryWriter, PositionWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::storage::ArtifactStore;

/// One catalog line derived from the booking request.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedLine {
    pub product_id: &'static str,
    pub quantity: f64,
    pub unit_price: f64,
}

impl DerivedLine {
    fn new(product_id: &'static str, quantity: f64, unit_price: f64) -> Self {
        Self {
            product_id,
            quantity,
            unit_price,
        }
    }

    pub fn total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Result of the document generation tail of the offer workflow.
#[derive(Debug, Clone)]
pub enum DocumentOutcome {
    Stored {
        filename: String,
        /// Public URL when available, the plain file name otherwise.
        reference: String,
    },
    Skipped {
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct OfferOutcome {
    pub inquiry_id: String,
    pub customer_id: String,
    pub document: DocumentOutcome,
}

/// Runs the offer workflow for one booking request.
///
/// Persists the customer, the inquiry and its positions, then renders and
/// stores the offer document. Failures after the rows are committed do not
/// fail the request, the outcome reports them instead.
pub async fn create_offer<R>(
    repo: &R,
    renderer: &dyn OfferRenderer,
    store: &dyn ArtifactStore,
    form: OfferForm,
) -> ServiceResult<OfferOutcome>
where
    R: CustomerReader + CustomerWriter + InquiryWriter + PositionWriter + ?Sized,
{
    let event_date = form
        .validated_event_date()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let customer_id = match (
        form.customer_id.as_deref().filter(|id| !id.is_empty()),
        &form.new_customer,
    ) {
        (Some(id), _) => id.to_string(),
        (None, Some(new_customer)) => {
            let id = ids::customer_id();
            repo.create_customer(&new_customer.to_new_customer(id.clone()))?;
            id
        }
        (None, None) => DEFAULT_CUSTOMER_ID.to_string(),
    };

    let inquiry = repo.create_inquiry(&NewInquiry::new(
        ids::inquiry_id(),
        customer_id.clone(),
        event_date,
        form.participants,
        form.total,
    ))?;

    let lines = derive_positions(&form);
    let positions: Vec<NewPosition> = lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            NewPosition::new(
                ids::position_id(),
                inquiry.id.clone(),
                line.product_id,
                line.quantity,
                line.unit_price,
                index as i32 + 1,
            )
        })
        .collect();
    repo.create_positions(&positions)?;

    let customer = match repo.get_customer(&customer_id) {
        Ok(customer) => customer,
        Err(err) => {
            log::error!("Failed to load customer {customer_id} for the offer document: {err}");
            None
        }
    };

    let document = build_document(&inquiry.id, customer, event_date, &form, &lines);
    let outcome = generate_document(repo, renderer, store, &document).await;

    Ok(OfferOutcome {
        inquiry_id: inquiry.id,
        customer_id,
        document: outcome,
    })
}

/// Maps the booking flags onto catalog lines, in offer document order.
pub fn derive_positions(form: &OfferForm) -> Vec<DerivedLine> {
    let participants = f64::from(form.participants);
    let dinner_count = form
        .dinner
        .filter(|dinner| dinner.active)
        .map(|dinner| dinner.count);

    let mut lines = Vec::new();

    match form.package.as_deref() {
        Some("full") => lines.push(DerivedLine::new(
            catalog::PROD_SEMINAR_FULL,
            participants,
            catalog::SEMINAR_FULL_PRICE,
        )),
        Some("half") => lines.push(DerivedLine::new(
            catalog::PROD_SEMINAR_HALF,
            participants,
            catalog::SEMINAR_HALF_PRICE,
        )),
        _ => {}
    }

    if let Some(room) = form.room.filter(|room| room.active) {
        lines.push(DerivedLine::new(
            catalog::PROD_ROOM_DBL_SINGLE,
            room.count,
            catalog::ROOM_DBL_SINGLE_PRICE,
        ));
    }

    if let Some(count) = dinner_count {
        lines.push(DerivedLine::new(
            catalog::PROD_DINNER_3C,
            count,
            catalog::DINNER_3C_PRICE,
        ));
    }

    let extras = form.extras.unwrap_or_default();
    if extras.sandwiches {
        lines.push(DerivedLine::new(
            catalog::PROD_EXTRA_BROETCHEN,
            participants,
            catalog::BROETCHEN_PRICE,
        ));
    }
    if extras.salad {
        lines.push(DerivedLine::new(
            catalog::PROD_EXTRA_SALATBUFFET,
            participants,
            catalog::SALATBUFFET_PRICE,
        ));
    }
    if extras.wine {
        // Wine accompanies the dinner courses, its quantity follows the
        // dinner count and it drops out entirely without a dinner.
        if let Some(count) = dinner_count {
            lines.push(DerivedLine::new(
                catalog::PROD_EXTRA_WEINBEGLEITUNG,
                count,
                catalog::WEINBEGLEITUNG_PRICE,
            ));
        }
    }

    let activities = form.activities.unwrap_or_default();
    if activities.cooking_class {
        lines.push(DerivedLine::new(
            catalog::PROD_ACTIVITY_KOCHKURS,
            participants,
            catalog::KOCHKURS_PRICE,
        ));
    }
    if activities.kitchen_rental {
        lines.push(DerivedLine::new(
            catalog::PROD_ACTIVITY_KUECHE,
            participants,
            catalog::KUECHE_PRICE,
        ));
    }

    lines
}

fn build_document(
    inquiry_id: &str,
    customer: Option<Customer>,
    event_date: NaiveDate,
    form: &OfferForm,
    lines: &[DerivedLine],
) -> OfferDocument {
    let (company_name, contact_name) = match customer {
        Some(customer) => {
            let contact = [
                &customer.contact_salutation,
                &customer.contact_first_name,
                &customer.contact_last_name,
            ]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");

            (customer.company_name, contact)
        }
        None => ("Unbekannt".to_string(), "Kunde".to_string()),
    };

    OfferDocument {
        inquiry_id: inquiry_id.to_string(),
        company_name,
        contact_name,
        event_date,
        participants: form.participants,
        total: form.total,
        lines: lines
            .iter()
            .map(|line| OfferLine {
                name: line.product_id.to_string(),
                quantity: line.quantity,
                unit_price: line.unit_price,
                total: line.total(),
            })
            .collect(),
    }
}

async fn generate_document<R>(
    repo: &R,
    renderer: &dyn OfferRenderer,
    store: &dyn ArtifactStore,
    document: &OfferDocument,
) -> DocumentOutcome
where
    R: InquiryWriter + ?Sized,
{
    let inquiry_id = &document.inquiry_id;

    let rendered = match renderer.render(document) {
        Ok(rendered) => rendered,
        Err(err) => {
            log::error!("Failed to render offer document for {inquiry_id}: {err}");
            return DocumentOutcome::Skipped {
                reason: err.to_string(),
            };
        }
    };

    let stored = match store.put(&rendered.filename, rendered.bytes).await {
        Ok(stored) => stored,
        Err(err) => {
            log::error!("Failed to store offer document for {inquiry_id}: {err}");
            return DocumentOutcome::Skipped {
                reason: err.to_string(),
            };
        }
    };

    let artifact = OfferArtifact::new(stored.filename.clone(), stored.url.clone());
    if let Err(err) = repo.attach_offer_artifact(inquiry_id, &artifact) {
        log::error!("Failed to record offer document for {inquiry_id}: {err}");
        return DocumentOutcome::Skipped {
            reason: err.to_string(),
        };
    }

    let reference = stored.url.unwrap_or_else(|| stored.filename.clone());
    DocumentOutcome::Stored {
        filename: stored.filename,
        reference,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::customer::{NewCustomer, UpdateCustomer};
    use crate::domain::inquiry::{Inquiry, InquiryStatus};
    use crate::forms::offer::{ActivitiesForm, CountedFlag, ExtrasForm, NewCustomerForm};
    use crate::renderer::{RenderError, RenderedOffer};
    use crate::repository::errors::RepositoryResult;
    use crate::repository::mock::{
        MockCustomerReader, MockCustomerWriter, MockInquiryWriter, MockPositionWriter,
    };
    use crate::storage::{ArtifactStoreError, StoredArtifact};

    struct CombinedOfferRepo {
        customer_reader: MockCustomerReader,
        customer_writer: MockCustomerWriter,
        inquiry_writer: MockInquiryWriter,
        position_writer: MockPositionWriter,
    }

    impl CombinedOfferRepo {
        fn new() -> Self {
            Self {
                customer_reader: MockCustomerReader::new(),
                customer_writer: MockCustomerWriter::new(),
                inquiry_writer: MockInquiryWriter::new(),
                position_writer: MockPositionWriter::new(),
            }
        }
    }

    impl CustomerReader for CombinedOfferRepo {
        fn get_customer(&self, id: &str) -> RepositoryResult<Option<Customer>> {
            self.customer_reader.get_customer(id)
        }

        fn list_customers(&self) -> RepositoryResult<Vec<Customer>> {
            self.customer_reader.list_customers()
        }
    }

    impl CustomerWriter for CombinedOfferRepo {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
            self.customer_writer.create_customer(new_customer)
        }

        fn update_customer(
            &self,
            id: &str,
            updates: &UpdateCustomer,
        ) -> RepositoryResult<Customer> {
            self.customer_writer.update_customer(id, updates)
        }

        fn ensure_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<()> {
            self.customer_writer.ensure_customer(new_customer)
        }
    }

    impl InquiryWriter for CombinedOfferRepo {
        fn create_inquiry(&self, new_inquiry: &NewInquiry) -> RepositoryResult<Inquiry> {
            self.inquiry_writer.create_inquiry(new_inquiry)
        }

        fn attach_offer_artifact(
            &self,
            id: &str,
            artifact: &OfferArtifact,
        ) -> RepositoryResult<Inquiry> {
            self.inquiry_writer.attach_offer_artifact(id, artifact)
        }
    }

    impl PositionWriter for CombinedOfferRepo {
        fn create_positions(&self, new_positions: &[NewPosition]) -> RepositoryResult<usize> {
            self.position_writer.create_positions(new_positions)
        }
    }

    struct StubRenderer {
        fail: bool,
    }

    impl OfferRenderer for StubRenderer {
        fn render(&self, document: &OfferDocument) -> Result<RenderedOffer, RenderError> {
            if self.fail {
                return Err(RenderError::TemplateMissing(PathBuf::from("missing.docx")));
            }

            Ok(RenderedOffer {
                filename: format!("Angebot_{}_Test.docx", document.inquiry_id),
                bytes: b"docx".to_vec(),
            })
        }
    }

    struct StubStore {
        fail: bool,
        url: Option<String>,
    }

    #[async_trait]
    impl ArtifactStore for StubStore {
        async fn put(
            &self,
            filename: &str,
            _bytes: Vec<u8>,
        ) -> Result<StoredArtifact, ArtifactStoreError> {
            if self.fail {
                return Err(ArtifactStoreError::Upload("bucket offline".to_string()));
            }

            Ok(StoredArtifact {
                filename: filename.to_string(),
                url: self.url.clone(),
            })
        }
    }

    fn inquiry_from(new_inquiry: &NewInquiry) -> Inquiry {
        Inquiry {
            id: new_inquiry.id.clone(),
            customer_id: new_inquiry.customer_id.clone(),
            event_name: None,
            start_date: new_inquiry.start_date,
            end_date: None,
            participants: new_inquiry.participants,
            event_type: None,
            venue: None,
            seating: None,
            room_reservation: false,
            status: new_inquiry.status,
            budget: new_inquiry.budget,
            valid_until: None,
            offer_number: None,
            offer_created_at: None,
            offer_sent_at: None,
            offer_status: None,
            contracting_party: None,
            billing_recipient: None,
            notes: None,
            offer_filename: None,
            offer_url: None,
            created_at: new_inquiry.created_at,
        }
    }

    fn customer_from(new_customer: &NewCustomer) -> Customer {
        Customer {
            id: new_customer.id.clone(),
            company_name: new_customer.company_name.clone(),
            role: new_customer.role.clone(),
            contact_salutation: new_customer.contact_salutation.clone(),
            contact_title: new_customer.contact_title.clone(),
            contact_first_name: new_customer.contact_first_name.clone(),
            contact_last_name: new_customer.contact_last_name.clone(),
            phone: new_customer.phone.clone(),
            email: new_customer.email.clone(),
            lead_salutation: new_customer.lead_salutation.clone(),
            lead_title: new_customer.lead_title.clone(),
            lead_first_name: new_customer.lead_first_name.clone(),
            lead_last_name: new_customer.lead_last_name.clone(),
            lead_phone: new_customer.lead_phone.clone(),
            lead_email: new_customer.lead_email.clone(),
            address: new_customer.address.clone(),
            city: new_customer.city.clone(),
            postal_code: new_customer.postal_code.clone(),
            country: new_customer.country.clone(),
            billing_address: new_customer.billing_address.clone(),
            language: new_customer.language.clone(),
            notes: new_customer.notes.clone(),
            marketing_consent: new_customer.marketing_consent,
            source: new_customer.source.clone(),
            material_sent: new_customer.material_sent,
            created_at: new_customer.created_at,
        }
    }

    fn base_form() -> OfferForm {
        OfferForm {
            customer_id: Some("C00001".to_string()),
            new_customer: None,
            date: "2025-09-12".to_string(),
            participants: 10,
            total: 680.0,
            package: None,
            room: None,
            dinner: None,
            extras: None,
            activities: None,
        }
    }

    #[test]
    fn full_package_books_the_day_rate_per_participant() {
        let mut form = base_form();
        form.package = Some("full".to_string());

        let lines = derive_positions(&form);

        assert_eq!(
            lines,
            vec![DerivedLine::new(catalog::PROD_SEMINAR_FULL, 10.0, 68.0)]
        );
        assert_eq!(lines[0].total(), 680.0);
    }

    #[test]
    fn half_package_books_the_half_day_rate() {
        let mut form = base_form();
        form.package = Some("half".to_string());

        let lines = derive_positions(&form);

        assert_eq!(
            lines,
            vec![DerivedLine::new(catalog::PROD_SEMINAR_HALF, 10.0, 49.0)]
        );
    }

    #[test]
    fn unknown_package_adds_no_line() {
        let mut form = base_form();
        form.package = Some("weekend".to_string());

        assert!(derive_positions(&form).is_empty());
    }

    #[test]
    fn room_and_dinner_use_their_own_counts() {
        let mut form = base_form();
        form.room = Some(CountedFlag {
            active: true,
            count: 6.0,
        });
        form.dinner = Some(CountedFlag {
            active: true,
            count: 4.0,
        });

        let lines = derive_positions(&form);

        assert_eq!(
            lines,
            vec![
                DerivedLine::new(catalog::PROD_ROOM_DBL_SINGLE, 6.0, 103.0),
                DerivedLine::new(catalog::PROD_DINNER_3C, 4.0, 39.0),
            ]
        );
    }

    #[test]
    fn inactive_flags_add_no_lines() {
        let mut form = base_form();
        form.room = Some(CountedFlag {
            active: false,
            count: 6.0,
        });
        form.dinner = Some(CountedFlag {
            active: false,
            count: 4.0,
        });

        assert!(derive_positions(&form).is_empty());
    }

    #[test]
    fn wine_quantity_follows_the_dinner_count() {
        let mut form = base_form();
        form.dinner = Some(CountedFlag {
            active: true,
            count: 4.0,
        });
        form.extras = Some(ExtrasForm {
            sandwiches: false,
            salad: false,
            wine: true,
        });

        let lines = derive_positions(&form);

        assert_eq!(
            lines,
            vec![
                DerivedLine::new(catalog::PROD_DINNER_3C, 4.0, 39.0),
                DerivedLine::new(catalog::PROD_EXTRA_WEINBEGLEITUNG, 4.0, 22.0),
            ]
        );
    }

    #[test]
    fn wine_without_a_dinner_adds_no_line() {
        let mut form = base_form();
        form.extras = Some(ExtrasForm {
            sandwiches: false,
            salad: false,
            wine: true,
        });

        assert!(derive_positions(&form).is_empty());
    }

    #[test]
    fn every_flag_set_yields_the_full_document_order() {
        let mut form = base_form();
        form.package = Some("full".to_string());
        form.room = Some(CountedFlag {
            active: true,
            count: 6.0,
        });
        form.dinner = Some(CountedFlag {
            active: true,
            count: 4.0,
        });
        form.extras = Some(ExtrasForm {
            sandwiches: true,
            salad: true,
            wine: true,
        });
        form.activities = Some(ActivitiesForm {
            cooking_class: true,
            kitchen_rental: true,
        });

        let ids: Vec<&str> = derive_positions(&form)
            .iter()
            .map(|line| line.product_id)
            .collect();

        assert_eq!(
            ids,
            vec![
                catalog::PROD_SEMINAR_FULL,
                catalog::PROD_ROOM_DBL_SINGLE,
                catalog::PROD_DINNER_3C,
                catalog::PROD_EXTRA_BROETCHEN,
                catalog::PROD_EXTRA_SALATBUFFET,
                catalog::PROD_EXTRA_WEINBEGLEITUNG,
                catalog::PROD_ACTIVITY_KOCHKURS,
                catalog::PROD_ACTIVITY_KUECHE,
            ]
        );
    }

    #[actix_web::test]
    async fn offer_for_an_existing_customer_creates_no_customer_row() {
        let mut repo = CombinedOfferRepo::new();

        repo.inquiry_writer
            .expect_create_inquiry()
            .times(1)
            .withf(|new_inquiry| {
                new_inquiry.customer_id == "C00001"
                    && new_inquiry.status == InquiryStatus::Pending
                    && new_inquiry.budget == 680.0
                    && new_inquiry.participants == 10
            })
            .returning(|new_inquiry| Ok(inquiry_from(new_inquiry)));
        repo.position_writer
            .expect_create_positions()
            .times(1)
            .withf(|positions| {
                positions.len() == 1
                    && positions[0].product_id == catalog::PROD_SEMINAR_FULL
                    && positions[0].quantity == 10.0
                    && positions[0].total == 680.0
                    && positions[0].sort_order == 1
            })
            .returning(|positions| Ok(positions.len()));
        repo.customer_reader
            .expect_get_customer()
            .times(1)
            .returning(|id| Ok(Some(customer_from(&NewCustomer::new(id).with_company("Acme GmbH")))));
        repo.inquiry_writer
            .expect_attach_offer_artifact()
            .times(1)
            .withf(|_, artifact| artifact.filename.ends_with(".docx"))
            .returning(|id, _| {
                Ok(inquiry_from(&NewInquiry::new(id, "C00001", NaiveDate::MIN, 10, 680.0)))
            });

        let mut form = base_form();
        form.package = Some("full".to_string());

        let outcome = create_offer(
            &repo,
            &StubRenderer { fail: false },
            &StubStore {
                fail: false,
                url: None,
            },
            form,
        )
        .await
        .unwrap();

        assert_eq!(outcome.customer_id, "C00001");
        assert!(matches!(
            outcome.document,
            DocumentOutcome::Stored { ref filename, ref reference }
                if filename.ends_with(".docx") && reference == filename
        ));
    }

    #[actix_web::test]
    async fn offer_with_a_new_customer_creates_the_customer_first() {
        let mut repo = CombinedOfferRepo::new();

        repo.customer_writer
            .expect_create_customer()
            .times(1)
            .withf(|new_customer| {
                new_customer.id.starts_with('C')
                    && new_customer.company_name == "Acme GmbH"
                    && new_customer.contact_first_name == "Erika"
                    && new_customer.contact_last_name == "Muster"
            })
            .returning(|new_customer| Ok(customer_from(new_customer)));
        repo.inquiry_writer
            .expect_create_inquiry()
            .times(1)
            .withf(|new_inquiry| new_inquiry.customer_id.starts_with('C'))
            .returning(|new_inquiry| Ok(inquiry_from(new_inquiry)));
        repo.position_writer
            .expect_create_positions()
            .times(1)
            .returning(|positions| Ok(positions.len()));
        repo.customer_reader
            .expect_get_customer()
            .times(1)
            .returning(|id| Ok(Some(customer_from(&NewCustomer::new(id).with_company("Acme GmbH")))));
        repo.inquiry_writer
            .expect_attach_offer_artifact()
            .times(1)
            .returning(|id, _| {
                Ok(inquiry_from(&NewInquiry::new(id, "C1", NaiveDate::MIN, 10, 680.0)))
            });

        let mut form = base_form();
        form.customer_id = None;
        form.new_customer = Some(NewCustomerForm {
            company: "Acme GmbH".to_string(),
            firstname: "Erika".to_string(),
            lastname: "Muster".to_string(),
            email: "erika@acme.example".to_string(),
            phone: "+43 660 1234".to_string(),
            address: "Rennweg 1".to_string(),
            city: "Wien".to_string(),
            zip: "1030".to_string(),
            country: "AT".to_string(),
        });

        let outcome = create_offer(
            &repo,
            &StubRenderer { fail: false },
            &StubStore {
                fail: false,
                url: None,
            },
            form,
        )
        .await
        .unwrap();

        assert!(outcome.customer_id.starts_with('C'));
    }

    #[actix_web::test]
    async fn offer_without_a_customer_falls_back_to_the_default() {
        let mut repo = CombinedOfferRepo::new();

        repo.inquiry_writer
            .expect_create_inquiry()
            .times(1)
            .withf(|new_inquiry| new_inquiry.customer_id == DEFAULT_CUSTOMER_ID)
            .returning(|new_inquiry| Ok(inquiry_from(new_inquiry)));
        repo.position_writer
            .expect_create_positions()
            .times(1)
            .returning(|positions| Ok(positions.len()));
        repo.customer_reader
            .expect_get_customer()
            .times(1)
            .returning(|_| Ok(None));
        repo.inquiry_writer
            .expect_attach_offer_artifact()
            .times(1)
            .returning(|id, _| {
                Ok(inquiry_from(&NewInquiry::new(
                    id,
                    DEFAULT_CUSTOMER_ID,
                    NaiveDate::MIN,
                    10,
                    680.0,
                )))
            });

        let mut form = base_form();
        form.customer_id = None;

        let outcome = create_offer(
            &repo,
            &StubRenderer { fail: false },
            &StubStore {
                fail: false,
                url: None,
            },
            form,
        )
        .await
        .unwrap();

        assert_eq!(outcome.customer_id, DEFAULT_CUSTOMER_ID);
    }

    #[actix_web::test]
    async fn render_failure_keeps_the_inquiry_and_reports_the_reason() {
        let mut repo = CombinedOfferRepo::new();

        repo.inquiry_writer
            .expect_create_inquiry()
            .times(1)
            .returning(|new_inquiry| Ok(inquiry_from(new_inquiry)));
        repo.position_writer
            .expect_create_positions()
            .times(1)
            .returning(|positions| Ok(positions.len()));
        repo.customer_reader
            .expect_get_customer()
            .times(1)
            .returning(|_| Ok(None));
        // No attach expectation, a failed render must not record an artifact.

        let outcome = create_offer(
            &repo,
            &StubRenderer { fail: true },
            &StubStore {
                fail: false,
                url: None,
            },
            base_form(),
        )
        .await
        .unwrap();

        assert!(matches!(
            outcome.document,
            DocumentOutcome::Skipped { ref reason } if reason.contains("missing.docx")
        ));
    }

    #[actix_web::test]
    async fn upload_failure_keeps_the_inquiry_and_reports_the_reason() {
        let mut repo = CombinedOfferRepo::new();

        repo.inquiry_writer
            .expect_create_inquiry()
            .times(1)
            .returning(|new_inquiry| Ok(inquiry_from(new_inquiry)));
        repo.position_writer
            .expect_create_positions()
            .times(1)
            .returning(|positions| Ok(positions.len()));
        repo.customer_reader
            .expect_get_customer()
            .times(1)
            .returning(|_| Ok(None));

        let outcome = create_offer(
            &repo,
            &StubRenderer { fail: false },
            &StubStore {
                fail: true,
                url: None,
            },
            base_form(),
        )
        .await
        .unwrap();

        assert!(matches!(
            outcome.document,
            DocumentOutcome::Skipped { ref reason } if reason.contains("bucket offline")
        ));
    }

    #[actix_web::test]
    async fn stored_documents_prefer_the_public_url() {
        let mut repo = CombinedOfferRepo::new();

        repo.inquiry_writer
            .expect_create_inquiry()
            .times(1)
            .returning(|new_inquiry| Ok(inquiry_from(new_inquiry)));
        repo.position_writer
            .expect_create_positions()
            .times(1)
            .returning(|positions| Ok(positions.len()));
        repo.customer_reader
            .expect_get_customer()
            .times(1)
            .returning(|_| Ok(None));
        repo.inquiry_writer
            .expect_attach_offer_artifact()
            .times(1)
            .withf(|_, artifact| {
                artifact.url.as_deref() == Some("https://cdn.example/offers/a.docx")
            })
            .returning(|id, _| {
                Ok(inquiry_from(&NewInquiry::new(id, "C00001", NaiveDate::MIN, 10, 680.0)))
            });

        let outcome = create_offer(
            &repo,
            &StubRenderer { fail: false },
            &StubStore {
                fail: false,
                url: Some("https://cdn.example/offers/a.docx".to_string()),
            },
            base_form(),
        )
        .await
        .unwrap();

        assert!(matches!(
            outcome.document,
            DocumentOutcome::Stored { ref reference, .. }
                if reference == "https://cdn.example/offers/a.docx"
        ));
    }

    #[actix_web::test]
    async fn invalid_payloads_touch_no_rows() {
        let repo = CombinedOfferRepo::new();

        let mut form = base_form();
        form.participants = 0;

        let result = create_offer(
            &repo,
            &StubRenderer { fail: false },
            &StubStore {
                fail: false,
                url: None,
            },
            form,
        )
        .await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[actix_web::test]
    async fn malformed_dates_touch_no_rows() {
        let repo = CombinedOfferRepo::new();

        let mut form = base_form();
        form.date = "12.09.2025".to_string();

        let result = create_offer(
            &repo,
            &StubRenderer { fail: false },
            &StubStore {
                fail: false,
                url: None,
            },
            form,
        )
        .await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
