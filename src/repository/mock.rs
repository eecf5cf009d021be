use mockall::mock;

use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::inquiry::{Inquiry, InquiryWithCustomer, NewInquiry, OfferArtifact};
use crate::domain::position::{NewPosition, PositionWithProduct};
use crate::domain::product::{NewProduct, Product};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CustomerReader, CustomerWriter, InquiryReader, InquiryWriter, PositionReader, PositionWriter,
    ProductReader, ProductWriter,
};

mock! {
    pub CustomerReader {}

    impl CustomerReader for CustomerReader {
        fn get_customer(&self, id: &str) -> RepositoryResult<Option<Customer>>;
        fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
    }
}

mock! {
    pub CustomerWriter {}

    impl CustomerWriter for CustomerWriter {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        fn update_customer(&self, id: &str, updates: &UpdateCustomer) -> RepositoryResult<Customer>;
        fn ensure_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product(&self, id: &str) -> RepositoryResult<Option<Product>>;
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn upsert_products(&self, products: &[NewProduct]) -> RepositoryResult<usize>;
    }
}

mock! {
    pub InquiryReader {}

    impl InquiryReader for InquiryReader {
        fn get_inquiry(&self, id: &str) -> RepositoryResult<Option<Inquiry>>;
        fn list_inquiries(&self) -> RepositoryResult<Vec<InquiryWithCustomer>>;
    }
}

mock! {
    pub InquiryWriter {}

    impl InquiryWriter for InquiryWriter {
        fn create_inquiry(&self, new_inquiry: &NewInquiry) -> RepositoryResult<Inquiry>;
        fn attach_offer_artifact(&self, id: &str, artifact: &OfferArtifact)
        -> RepositoryResult<Inquiry>;
    }
}

mock! {
    pub PositionReader {}

    impl PositionReader for PositionReader {
        fn list_positions(&self, inquiry_id: &str) -> RepositoryResult<Vec<PositionWithProduct>>;
    }
}

mock! {
    pub PositionWriter {}

    impl PositionWriter for PositionWriter {
        fn create_positions(&self, new_positions: &[NewPosition]) -> RepositoryResult<usize>;
    }
}
