//! The data-access seam for every portal operation.

use portal::PortalError;
use portal::model::*;

/// Every operation the portal UI needs from a backend.
///
/// Student-scoped operations take the student's user id. All of them fail
/// with [`PortalError`]; handlers map that to an HTTP status.
#[async_trait::async_trait]
pub trait FeeRepository: Send + Sync {
    // ---- auth ----

    /// Match a username/password pair; the returned user carries no password.
    async fn login(&self, username: &str, password: &str) -> Result<User, PortalError>;

    /// Start a password reset for the account registered to `email`.
    async fn reset_password(&self, email: &str) -> Result<Ack, PortalError>;

    // ---- student ----

    async fn payment_history(&self, student_id: u32) -> Result<Vec<Payment>, PortalError>;
    async fn pending_fees(&self, student_id: u32) -> Result<Vec<PendingFee>, PortalError>;
    async fn fee_details(&self, fee_id: u32) -> Result<FeeDetails, PortalError>;
    async fn receipt(&self, receipt_id: &str) -> Result<Receipt, PortalError>;

    /// Settle a payable fee and record the receipt.
    async fn make_payment(&self, student_id: u32, request: PaymentRequest)
    -> Result<PaymentConfirmation, PortalError>;

    async fn student_profile(&self, student_id: u32) -> Result<StudentProfile, PortalError>;
    async fn update_profile(&self, student_id: u32, update: ProfileUpdate) -> Result<StudentProfile, PortalError>;
    async fn change_password(&self, student_id: u32, change: PasswordChange) -> Result<Ack, PortalError>;

    // ---- admin ----

    async fn dashboard_summary(&self) -> Result<DashboardSummary, PortalError>;
    async fn monthly_trends(&self, period: &str) -> Result<Vec<MonthlyTrend>, PortalError>;
    async fn recent_payments(&self, limit: usize) -> Result<Vec<RecentPayment>, PortalError>;
    async fn students(&self, query: StudentQuery) -> Result<Vec<StudentRecord>, PortalError>;
    async fn student_details(&self, id: u32) -> Result<StudentRecord, PortalError>;
    async fn fee_structures(&self, query: FeeStructureQuery) -> Result<Vec<FeeStructure>, PortalError>;
    async fn add_fee_structure(&self, draft: FeeStructureDraft) -> Result<FeeStructure, PortalError>;
    async fn update_fee_structure(&self, id: u32, draft: FeeStructureDraft) -> Result<FeeStructure, PortalError>;
    async fn delete_fee_structure(&self, id: u32) -> Result<Ack, PortalError>;
    async fn transactions(&self) -> Result<Vec<Transaction>, PortalError>;
    async fn generate_report(&self, request: ReportRequest) -> Result<ReportResult, PortalError>;
    async fn send_reminders(&self, request: ReminderRequest) -> Result<ReminderResult, PortalError>;
}
