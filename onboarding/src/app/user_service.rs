//! User service
//!
//! Onboards new users: validates the applicant, resolves their client,
//! settles the credit limit for the client's tier and persists the result.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::app::policy::OnboardingPolicy;
use crate::app::validation::validate_applicant;
use crate::domain::entities::{Client, ClientId, NewUser, User};
use crate::domain::ports::{ClientDirectory, Clock, CreditScoringService, UserStore};
use crate::error::{OnboardingError, CLIENT_NOT_FOUND, INSUFFICIENT_CREDIT};

/// Service for onboarding users
pub struct UserService<CD, CS, US, C>
where
    CD: ClientDirectory,
    CS: CreditScoringService,
    US: UserStore,
    C: Clock,
{
    clients: Arc<CD>,
    credit: Arc<CS>,
    users: Arc<US>,
    clock: Arc<C>,
    policy: OnboardingPolicy,
}

impl<CD, CS, US, C> UserService<CD, CS, US, C>
where
    CD: ClientDirectory,
    CS: CreditScoringService,
    US: UserStore,
    C: Clock,
{
    pub fn new(
        clients: Arc<CD>,
        credit: Arc<CS>,
        users: Arc<US>,
        clock: Arc<C>,
        policy: OnboardingPolicy,
    ) -> Self {
        Self {
            clients,
            credit,
            users,
            clock,
            policy,
        }
    }

    pub fn policy(&self) -> &OnboardingPolicy {
        &self.policy
    }

    /// Onboard a new user
    ///
    /// Steps, each of which ends the call on failure:
    /// 1. Validate names, email and age (no collaborator is called before this)
    /// 2. Resolve the client
    /// 3. Score credit unless the client is very important
    /// 4. Reject limits below the policy threshold
    /// 5. Save the user
    pub async fn add_user(
        &self,
        first_name: &str,
        surname: &str,
        email: &str,
        date_of_birth: NaiveDate,
        client_id: ClientId,
    ) -> Result<User, OnboardingError> {
        if let Err(e) = validate_applicant(
            first_name,
            surname,
            email,
            date_of_birth,
            self.clock.today(),
            &self.policy,
        ) {
            tracing::warn!(client_id = %client_id, reason = %e, "Rejected applicant");
            return Err(e);
        }
        tracing::debug!(client_id = %client_id, "Applicant validated");

        let Some(client) = self.clients.find_by_id(client_id).await? else {
            tracing::warn!(client_id = %client_id, "Client not found");
            return Err(OnboardingError::NotFound(CLIENT_NOT_FOUND.to_string()));
        };
        tracing::debug!(client_id = %client_id, tier = %client.tier(), "Client resolved");

        let new_user = NewUser {
            first_name: first_name.to_string(),
            surname: surname.to_string(),
            email_address: email.to_string(),
            date_of_birth,
        };
        let user = self.create_user(new_user, client).await?;

        if user.has_credit_limit && !self.policy.accepts_credit_limit(user.credit_limit) {
            tracing::warn!(
                client_id = %client_id,
                credit_limit = user.credit_limit,
                "Insufficient credit limit"
            );
            return Err(OnboardingError::InsufficientCredit(
                INSUFFICIENT_CREDIT.to_string(),
            ));
        }

        tracing::debug!(client_id = %client_id, "Saving user");
        self.users
            .save(&user)
            .await
            .map_err(OnboardingError::PersistenceFailure)?;

        tracing::info!(
            client_id = %client_id,
            tier = %user.tier(),
            credit_limit = user.credit_limit,
            "Onboarded user"
        );

        Ok(user)
    }

    /// Attach the client and the tier's credit decision to the applicant
    async fn create_user(&self, new_user: NewUser, client: Client) -> Result<User, OnboardingError> {
        let tier = client.tier();

        let Some(multiplier) = self.policy.credit_multiplier(tier) else {
            tracing::debug!(client_id = %client.id, tier = %tier, "Skipping credit scoring");
            return Ok(new_user.into_user(client, None));
        };

        let scored = self
            .credit
            .credit_limit(
                &new_user.first_name,
                &new_user.surname,
                new_user.date_of_birth,
            )
            .await?;
        let credit_limit = scored.saturating_mul(multiplier);

        tracing::debug!(
            client_id = %client.id,
            tier = %tier,
            scored,
            credit_limit,
            "Scored credit"
        );

        Ok(new_user.into_user(client, Some(credit_limit)))
    }
}
