//! In-memory repository over the demo fixtures.
//!
//! DESIGN
//! ======
//! The whole dataset lives in one `Ledger` behind a `tokio::sync::RwLock`.
//! Reads clone out of it; writes (payments, profile edits, fee-structure
//! edits, password changes) update it in place and last for the life of
//! the process. Every operation first sleeps for a fixed per-operation
//! delay unless latency simulation is switched off.
//!
//! A payment moves the fee out of the pending list, appends to the
//! student's history, issues a receipt, and prepends a row to the admin
//! ledger, so each view agrees after the fact.

use std::time::Duration;

use portal::PortalError;
use portal::filter::DateRangePreset;
use portal::fixtures::{self, Account};
use portal::format::{academic_year, generate_id, receipt_id, transaction_id};
use portal::model::*;
use portal::validate::{check_fee_structure, check_password_change, check_payment, check_profile_update};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};
use tokio::sync::RwLock;

use super::repository::FeeRepository;

/// Simulated response times in milliseconds.
mod delay {
    pub const LOGIN: u64 = 800;
    pub const RESET_PASSWORD: u64 = 500;
    pub const HISTORY: u64 = 800;
    pub const LOOKUP: u64 = 500;
    pub const PAYMENT: u64 = 1500;
    pub const PROFILE: u64 = 600;
    pub const WRITE: u64 = 1000;
    pub const SUMMARY: u64 = 800;
    pub const TRENDS: u64 = 600;
    pub const STUDENTS: u64 = 800;
    pub const FEE_STRUCTURES: u64 = 600;
    pub const REPORT: u64 = 1500;
    pub const REMINDERS: u64 = 1200;
}

/// Source of the current time; replaced in tests.
pub type Clock = fn() -> OffsetDateTime;

struct Credential {
    user: User,
    password: String,
}

struct Ledger {
    credentials: Vec<Credential>,
    profile: StudentProfile,
    payments: Vec<Payment>,
    payable: Vec<FeeDetails>,
    pending_ids: Vec<u32>,
    /// Fees settled online in this process, whatever day they were paid.
    paid_ids: Vec<u32>,
    receipts: Vec<Receipt>,
    students: Vec<StudentRecord>,
    fee_structures: Vec<FeeStructure>,
    transactions: Vec<Transaction>,
    recent: Vec<RecentPayment>,
}

impl Ledger {
    fn seeded() -> Self {
        let pending_ids = fixtures::pending_fees().iter().map(|f| f.id).collect();
        Self {
            credentials: fixtures::accounts()
                .into_iter()
                .map(|Account { user, password }| Credential { user, password: password.to_owned() })
                .collect(),
            profile: fixtures::profile(),
            payments: fixtures::payments(),
            payable: fixtures::fee_details(),
            pending_ids,
            paid_ids: Vec::new(),
            receipts: fixtures::receipts(),
            students: fixtures::students(),
            fee_structures: fixtures::fee_structures(),
            transactions: fixtures::transactions(),
            recent: fixtures::recent_payments(),
        }
    }

    /// The student account behind `student_id`.
    fn student(&self, student_id: u32) -> Result<&Credential, PortalError> {
        self.credentials
            .iter()
            .find(|c| c.user.id == student_id && c.user.role == Role::Student)
            .ok_or_else(|| PortalError::not_found("Student", student_id))
    }

    fn student_mut(&mut self, student_id: u32) -> Result<&mut Credential, PortalError> {
        self.credentials
            .iter_mut()
            .find(|c| c.user.id == student_id && c.user.role == Role::Student)
            .ok_or_else(|| PortalError::not_found("Student", student_id))
    }
}

pub struct FixtureRepository {
    simulate_latency: bool,
    clock: Clock,
    ledger: RwLock<Ledger>,
}

impl FixtureRepository {
    #[must_use]
    pub fn new(simulate_latency: bool) -> Self {
        Self { simulate_latency, clock: OffsetDateTime::now_utc, ledger: RwLock::new(Ledger::seeded()) }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    async fn pause(&self, millis: u64) {
        if self.simulate_latency {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }

    fn now(&self) -> PrimitiveDateTime {
        let now = (self.clock)();
        PrimitiveDateTime::new(now.date(), now.time())
    }

    fn today(&self) -> Date {
        (self.clock)().date()
    }
}

fn stamp(at: PrimitiveDateTime) -> String {
    at.format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
        .unwrap_or_default()
}

fn iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]")).unwrap_or_default()
}

#[async_trait::async_trait]
impl FeeRepository for FixtureRepository {
    async fn login(&self, username: &str, password: &str) -> Result<User, PortalError> {
        self.pause(delay::LOGIN).await;
        let ledger = self.ledger.read().await;
        ledger
            .credentials
            .iter()
            .find(|c| c.user.username == username && c.password == password)
            .map(|c| c.user.clone())
            .ok_or(PortalError::InvalidCredentials)
    }

    async fn reset_password(&self, email: &str) -> Result<Ack, PortalError> {
        self.pause(delay::RESET_PASSWORD).await;
        let ledger = self.ledger.read().await;
        if !ledger.credentials.iter().any(|c| c.user.email.eq_ignore_ascii_case(email.trim())) {
            return Err(PortalError::not_found("Email", email));
        }
        tracing::info!(%email, "password reset requested");
        Ok(Ack::ok("Password reset link sent"))
    }

    async fn payment_history(&self, student_id: u32) -> Result<Vec<Payment>, PortalError> {
        self.pause(delay::HISTORY).await;
        let ledger = self.ledger.read().await;
        ledger.student(student_id)?;
        Ok(ledger.payments.clone())
    }

    async fn pending_fees(&self, student_id: u32) -> Result<Vec<PendingFee>, PortalError> {
        self.pause(delay::HISTORY).await;
        let ledger = self.ledger.read().await;
        ledger.student(student_id)?;
        Ok(ledger
            .payable
            .iter()
            .filter(|d| ledger.pending_ids.contains(&d.fee.id))
            .map(|d| d.fee.clone())
            .collect())
    }

    async fn fee_details(&self, fee_id: u32) -> Result<FeeDetails, PortalError> {
        self.pause(delay::LOOKUP).await;
        let ledger = self.ledger.read().await;
        ledger
            .payable
            .iter()
            .find(|d| d.fee.id == fee_id)
            .cloned()
            .ok_or_else(|| PortalError::not_found("Fee details", fee_id))
    }

    async fn receipt(&self, receipt_id: &str) -> Result<Receipt, PortalError> {
        self.pause(delay::LOOKUP).await;
        let ledger = self.ledger.read().await;
        ledger
            .receipts
            .iter()
            .find(|r| r.id == receipt_id)
            .cloned()
            .ok_or_else(|| PortalError::not_found("Receipt", receipt_id))
    }

    async fn make_payment(
        &self,
        student_id: u32,
        request: PaymentRequest,
    ) -> Result<PaymentConfirmation, PortalError> {
        self.pause(delay::PAYMENT).await;
        let now = self.now();
        check_payment(&request, now.date())?;

        let mut ledger = self.ledger.write().await;
        let student = ledger.student(student_id)?.user.clone();
        let details = ledger
            .payable
            .iter()
            .find(|d| d.fee.id == request.fee_id)
            .cloned()
            .ok_or_else(|| PortalError::not_found("Fee details", request.fee_id))?;

        if ledger.paid_ids.contains(&details.fee.id) {
            return Err(PortalError::Validation("This fee has already been paid".to_owned()));
        }
        let receipt_no = receipt_id(now.date(), details.fee.id);

        let method = request.payment_method;
        let millis = u128::try_from((self.clock)().unix_timestamp_nanos() / 1_000_000).unwrap_or_default();
        let txn = transaction_id(millis);
        let reference = generate_id(method.reference_prefix(), millis, rand::random::<u64>());
        let paid_at = stamp(now);
        let roll_number = student.roll_number.clone().unwrap_or_default();

        ledger.pending_ids.retain(|id| *id != details.fee.id);
        ledger.paid_ids.push(details.fee.id);
        ledger.payments.insert(
            0,
            Payment {
                id: receipt_no.clone(),
                fee_type: details.fee.fee_type.clone(),
                semester: details.fee.semester,
                amount: details.fee.amount,
                paid_date: iso_date(now.date()),
                payment_mode: method.mode_label().to_owned(),
                reference: reference.clone(),
                status: PaymentStatus::Success,
            },
        );
        ledger.receipts.push(Receipt {
            id: receipt_no.clone(),
            student_name: student.name.clone(),
            roll_number: roll_number.clone(),
            fee_type: details.fee.fee_type.clone(),
            semester: details.fee.semester,
            amount: details.fee.amount,
            convenience_fee: details.convenience_fee,
            late_charge: details.fee.late_charge,
            total_amount: details.total_payable(),
            paid_date: paid_at.clone(),
            academic_year: academic_year(now.date()),
            payment_mode: method.mode_label().to_owned(),
            transaction_id: txn.clone(),
            payment_status: PaymentStatus::Success,
        });
        let tx = Transaction {
            id: receipt_no.clone(),
            student_name: student.name,
            roll_number,
            branch: student.branch.unwrap_or_default(),
            semester: student.semester.unwrap_or(details.fee.semester),
            fee_type: details.fee.fee_type.clone(),
            amount: details.fee.amount,
            date: paid_at.clone(),
            mode: method.mode_label().to_owned(),
            reference,
            status: PaymentStatus::Success,
        };
        ledger.recent.insert(0, RecentPayment::from(&tx));
        ledger.transactions.insert(0, tx);

        tracing::info!(student_id, fee_id = details.fee.id, receipt = %receipt_no, "payment recorded");
        Ok(PaymentConfirmation {
            success: true,
            receipt_id: receipt_no,
            transaction_id: txn,
            payment_method: method,
            paid_date: paid_at,
        })
    }

    async fn student_profile(&self, student_id: u32) -> Result<StudentProfile, PortalError> {
        self.pause(delay::PROFILE).await;
        let ledger = self.ledger.read().await;
        ledger.student(student_id)?;
        Ok(ledger.profile.clone())
    }

    async fn update_profile(&self, student_id: u32, update: ProfileUpdate) -> Result<StudentProfile, PortalError> {
        self.pause(delay::WRITE).await;
        check_profile_update(&update)?;
        let mut ledger = self.ledger.write().await;
        ledger.student_mut(student_id)?.user.email = update.email.trim().to_owned();
        let profile = &mut ledger.profile;
        profile.email = update.email.trim().to_owned();
        profile.phone = update.phone.trim().to_owned();
        profile.address = update.address;
        profile.guardian_phone = update.guardian_phone.trim().to_owned();
        Ok(profile.clone())
    }

    async fn change_password(&self, student_id: u32, change: PasswordChange) -> Result<Ack, PortalError> {
        self.pause(delay::WRITE).await;
        check_password_change(&change)?;
        let mut ledger = self.ledger.write().await;
        let credential = ledger.student_mut(student_id)?;
        if credential.password != change.current_password {
            return Err(PortalError::Validation("Current password is incorrect".to_owned()));
        }
        credential.password = change.new_password;
        Ok(Ack::ok("Password updated successfully"))
    }

    async fn dashboard_summary(&self) -> Result<DashboardSummary, PortalError> {
        self.pause(delay::SUMMARY).await;
        Ok(fixtures::dashboard_summary())
    }

    async fn monthly_trends(&self, period: &str) -> Result<Vec<MonthlyTrend>, PortalError> {
        self.pause(delay::TRENDS).await;
        tracing::debug!(%period, "monthly trends");
        Ok(fixtures::monthly_trends())
    }

    async fn recent_payments(&self, limit: usize) -> Result<Vec<RecentPayment>, PortalError> {
        self.pause(delay::LOOKUP).await;
        let ledger = self.ledger.read().await;
        Ok(ledger.recent.iter().take(limit).cloned().collect())
    }

    async fn students(&self, query: StudentQuery) -> Result<Vec<StudentRecord>, PortalError> {
        self.pause(delay::STUDENTS).await;
        let ledger = self.ledger.read().await;
        Ok(ledger.students.iter().filter(|s| query.matches(s)).cloned().collect())
    }

    async fn student_details(&self, id: u32) -> Result<StudentRecord, PortalError> {
        self.pause(delay::LOOKUP).await;
        let ledger = self.ledger.read().await;
        ledger
            .students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| PortalError::not_found("Student", id))
    }

    async fn fee_structures(&self, query: FeeStructureQuery) -> Result<Vec<FeeStructure>, PortalError> {
        self.pause(delay::FEE_STRUCTURES).await;
        let ledger = self.ledger.read().await;
        Ok(ledger.fee_structures.iter().filter(|f| query.matches(f)).cloned().collect())
    }

    async fn add_fee_structure(&self, draft: FeeStructureDraft) -> Result<FeeStructure, PortalError> {
        self.pause(delay::WRITE).await;
        let today = self.today();
        check_fee_structure(&draft, today)?;
        let mut ledger = self.ledger.write().await;
        let id = ledger.fee_structures.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        let mut fee = FeeStructure { id, created_on: iso_date(today), ..FeeStructure::default() };
        fee.apply(draft);
        ledger.fee_structures.push(fee.clone());
        tracing::info!(id, fee_type = %fee.fee_type, "fee structure added");
        Ok(fee)
    }

    async fn update_fee_structure(&self, id: u32, draft: FeeStructureDraft) -> Result<FeeStructure, PortalError> {
        self.pause(delay::WRITE).await;
        check_fee_structure(&draft, self.today())?;
        let mut ledger = self.ledger.write().await;
        let fee = ledger
            .fee_structures
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| PortalError::not_found("Fee structure", id))?;
        fee.apply(draft);
        Ok(fee.clone())
    }

    async fn delete_fee_structure(&self, id: u32) -> Result<Ack, PortalError> {
        self.pause(delay::WRITE).await;
        let mut ledger = self.ledger.write().await;
        let before = ledger.fee_structures.len();
        ledger.fee_structures.retain(|f| f.id != id);
        if ledger.fee_structures.len() == before {
            return Err(PortalError::not_found("Fee structure", id));
        }
        tracing::info!(id, "fee structure deleted");
        Ok(Ack::ok("Fee structure deleted successfully"))
    }

    async fn transactions(&self) -> Result<Vec<Transaction>, PortalError> {
        self.pause(delay::HISTORY).await;
        let ledger = self.ledger.read().await;
        Ok(ledger.transactions.clone())
    }

    async fn generate_report(&self, request: ReportRequest) -> Result<ReportResult, PortalError> {
        self.pause(delay::REPORT).await;
        let (start, end) = match (request.start_date.is_empty(), request.end_date.is_empty()) {
            (true, true) => {
                let (start, end) = DateRangePreset::ThisMonth.report_dates(self.today());
                (iso_date(start), iso_date(end))
            }
            _ => (request.start_date.clone(), request.end_date.clone()),
        };
        tracing::info!(report = request.report_type.as_str(), %start, %end, "report generated");
        Ok(ReportResult {
            success: true,
            report_url: "#".to_owned(),
            message: format!("{} report generated successfully", request.report_type.as_str()),
        })
    }

    async fn send_reminders(&self, request: ReminderRequest) -> Result<ReminderResult, PortalError> {
        self.pause(delay::REMINDERS).await;
        if request.student_ids.is_empty() {
            return Err(PortalError::Validation("Select at least one student".to_owned()));
        }
        let sent = request.student_ids.len();
        tracing::info!(sent, "payment reminders sent");
        Ok(ReminderResult { success: true, sent, message: format!("Reminders sent to {sent} students") })
    }
}

#[cfg(test)]
#[path = "fixture_test.rs"]
mod fixture_test;
