use diesel::prelude::*;

use crate::domain::inquiry::NewInquiry as DomainNewInquiry;
use crate::domain::inquiry::{Inquiry as DomainInquiry, InquiryWithCustomer, OfferArtifact};
use crate::models::inquiry::{Inquiry, NewInquiry};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, InquiryReader, InquiryWriter};

impl InquiryReader for DieselRepository {
    fn get_inquiry(&self, id: &str) -> RepositoryResult<Option<DomainInquiry>> {
        use crate::schema::inquiries;

        let mut conn = self.conn()?;

        let inquiry = inquiries::table
            .find(id)
            .first::<Inquiry>(&mut conn)
            .optional()?;

        Ok(inquiry.map(Into::into))
    }

    fn list_inquiries(&self) -> RepositoryResult<Vec<InquiryWithCustomer>> {
        use crate::schema::{customers, inquiries};

        let mut conn = self.conn()?;

        // Left join keeps inquiries whose customer row was never created.
        let rows = inquiries::table
            .left_join(customers::table)
            .select((
                Inquiry::as_select(),
                customers::company_name.nullable(),
                customers::contact_first_name.nullable(),
                customers::contact_last_name.nullable(),
            ))
            .order(inquiries::created_at.desc())
            .load::<(Inquiry, Option<String>, Option<String>, Option<String>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(
                |(inquiry, company_name, contact_first_name, contact_last_name)| {
                    InquiryWithCustomer {
                        inquiry: inquiry.into(),
                        company_name,
                        contact_first_name,
                        contact_last_name,
                    }
                },
            )
            .collect())
    }
}

impl InquiryWriter for DieselRepository {
    fn create_inquiry(&self, new_inquiry: &DomainNewInquiry) -> RepositoryResult<DomainInquiry> {
        use crate::schema::inquiries;

        let mut conn = self.conn()?;
        let db_inquiry = NewInquiry::from(new_inquiry);

        let created = diesel::insert_into(inquiries::table)
            .values(&db_inquiry)
            .get_result::<Inquiry>(&mut conn)?;

        Ok(created.into())
    }

    fn attach_offer_artifact(
        &self,
        id: &str,
        artifact: &OfferArtifact,
    ) -> RepositoryResult<DomainInquiry> {
        use crate::schema::inquiries;

        let mut conn = self.conn()?;

        let updated = diesel::update(inquiries::table.find(id))
            .set((
                inquiries::offer_filename.eq(&artifact.filename),
                inquiries::offer_url.eq(artifact.url.as_deref()),
                inquiries::offer_created_at.eq(artifact.created_at),
            ))
            .get_result::<Inquiry>(&mut conn)?;

        Ok(updated.into())
    }
}
