//! Domain records exchanged between the repository, the JSON API, and the UI.
//!
//! DESIGN
//! ======
//! Every record serializes with camelCase keys and implements [`grid::Row`]
//! under those same keys, so a table column named `"paidDate"` reads the
//! same field the JSON body carries. Dates travel as ISO strings
//! (`2025-01-15` or `2025-03-20 09:45:23`); [`crate::format`] parses them
//! for display.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use grid::{CellValue, Row};
use serde::{Deserialize, Serialize};

// =============================================================================
// USERS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Admin => "admin",
        }
    }

    /// Landing route after sign-in.
    #[must_use]
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Student => "/student/dashboard",
            Self::Admin => "/admin/dashboard",
        }
    }
}

/// Signed-in user as returned by login; never carries the password.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub username: String,
    pub role: Role,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default)]
    pub profile_image: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Generic success acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    pub message: String,
}

impl Ack {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }
}

// =============================================================================
// STUDENT PAYMENTS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Success,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub const ALL: [Self; 3] = [Self::Success, Self::Pending, Self::Failed];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeStatus {
    Paid,
    #[default]
    Pending,
    Overdue,
    Upcoming,
}

impl FeeStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
            Self::Upcoming => "upcoming",
        }
    }
}

/// A completed payment in a student's history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Receipt number.
    pub id: String,
    #[serde(rename = "type")]
    pub fee_type: String,
    pub semester: u32,
    pub amount: u64,
    pub paid_date: String,
    pub payment_mode: String,
    pub reference: String,
    pub status: PaymentStatus,
}

impl Row for Payment {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.as_str().into(),
            "type" => self.fee_type.as_str().into(),
            "semester" => self.semester.into(),
            "amount" => self.amount.into(),
            "paidDate" => self.paid_date.as_str().into(),
            "paymentMode" => self.payment_mode.as_str().into(),
            "reference" => self.reference.as_str().into(),
            "status" => self.status.as_str().into(),
            _ => CellValue::Null,
        }
    }
}

/// A fee the student still owes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingFee {
    pub id: u32,
    #[serde(rename = "type")]
    pub fee_type: String,
    pub semester: u32,
    pub amount: u64,
    pub due_date: String,
    pub status: FeeStatus,
    pub description: String,
    pub late_charge: u64,
}

impl PendingFee {
    /// Amount plus any late charge.
    #[must_use]
    pub fn total_due(&self) -> u64 {
        self.amount + self.late_charge
    }
}

impl Row for PendingFee {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.into(),
            "type" => self.fee_type.as_str().into(),
            "semester" => self.semester.into(),
            "amount" => self.amount.into(),
            "dueDate" => self.due_date.as_str().into(),
            "status" => self.status.as_str().into(),
            "description" => self.description.as_str().into(),
            "lateCharge" => self.late_charge.into(),
            "totalDue" => self.total_due().into(),
            _ => CellValue::Null,
        }
    }
}

/// A pending fee with the gateway convenience fee, as shown on the payment
/// page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeDetails {
    #[serde(flatten)]
    pub fee: PendingFee,
    pub convenience_fee: u64,
}

impl FeeDetails {
    /// Amount + convenience fee + late charge.
    #[must_use]
    pub fn total_payable(&self) -> u64 {
        self.fee.amount + self.convenience_fee + self.fee.late_charge
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: String,
    pub student_name: String,
    pub roll_number: String,
    pub fee_type: String,
    pub semester: u32,
    pub amount: u64,
    pub convenience_fee: u64,
    pub late_charge: u64,
    pub total_amount: u64,
    pub paid_date: String,
    pub academic_year: String,
    pub payment_mode: String,
    pub transaction_id: String,
    pub payment_status: PaymentStatus,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Upi,
    Card,
    Netbanking,
    Cash,
    Dd,
}

impl PaymentMethod {
    pub const ONLINE: [Self; 3] = [Self::Upi, Self::Card, Self::Netbanking];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upi => "upi",
            Self::Card => "card",
            Self::Netbanking => "netbanking",
            Self::Cash => "cash",
            Self::Dd => "dd",
        }
    }

    /// Payment-mode label used in ledgers and receipts.
    #[must_use]
    pub fn mode_label(self) -> &'static str {
        match self {
            Self::Upi => "Online (UPI)",
            Self::Card => "Online (Card)",
            Self::Netbanking => "Online (Net Banking)",
            Self::Cash => "Cash",
            Self::Dd => "DD",
        }
    }

    /// Leading letters of a bank reference for this method.
    #[must_use]
    pub fn reference_prefix(self) -> &'static str {
        match self {
            Self::Upi => "UPI",
            Self::Card => "CARD",
            Self::Netbanking => "NB",
            Self::Cash => "CASH",
            Self::Dd => "DD",
        }
    }

    #[must_use]
    pub fn is_online(self) -> bool {
        Self::ONLINE.contains(&self)
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        [Self::Upi, Self::Card, Self::Netbanking, Self::Cash, Self::Dd]
            .into_iter()
            .find(|m| m.as_str() == raw)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub number: String,
    pub holder: String,
    pub expiry: String,
    pub cvv: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub fee_id: u32,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<CardDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    pub success: bool,
    pub receipt_id: String,
    pub transaction_id: String,
    pub payment_method: PaymentMethod,
    pub paid_date: String,
}

// =============================================================================
// PROFILE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: u32,
    pub name: String,
    pub roll_number: String,
    pub email: String,
    pub phone: String,
    pub branch: String,
    pub semester: u32,
    pub section: String,
    pub batch_year: String,
    pub address: String,
    pub father_name: String,
    pub mother_name: String,
    pub guardian_phone: String,
    pub blood_group: String,
    pub dob: String,
    pub admission_year: String,
    pub hostel_resident: String,
    pub bus_route: String,
    pub scholarship_status: String,
    pub profile_image: String,
}

/// The profile fields a student may edit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub guardian_phone: String,
}

impl ProfileUpdate {
    #[must_use]
    pub fn from_profile(profile: &StudentProfile) -> Self {
        Self {
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            address: profile.address.clone(),
            guardian_phone: profile.guardian_phone.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

// =============================================================================
// ADMIN
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_collected: u64,
    pub pending_amount: u64,
    pub overdue_amount: u64,
    pub total_students: u32,
    pub paid_students: u32,
    pub pending_students: u32,
    pub overdue_students: u32,
    pub collection_rate: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub collected: u64,
    pub target: u64,
}

impl Row for MonthlyTrend {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "month" => self.month.as_str().into(),
            "collected" => self.collected.into(),
            "target" => self.target.into(),
            _ => CellValue::Null,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPayment {
    pub id: String,
    pub student_name: String,
    pub roll_number: String,
    pub fee_type: String,
    pub amount: u64,
    pub date: String,
    pub mode: String,
    pub status: PaymentStatus,
}

impl From<&Transaction> for RecentPayment {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id.clone(),
            student_name: tx.student_name.clone(),
            roll_number: tx.roll_number.clone(),
            fee_type: tx.fee_type.clone(),
            amount: tx.amount,
            date: tx.date.clone(),
            mode: tx.mode.clone(),
            status: tx.status,
        }
    }
}

impl Row for RecentPayment {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.as_str().into(),
            "studentName" => self.student_name.as_str().into(),
            "rollNumber" => self.roll_number.as_str().into(),
            "feeType" => self.fee_type.as_str().into(),
            "amount" => self.amount.into(),
            "date" => self.date.as_str().into(),
            "mode" => self.mode.as_str().into(),
            "status" => self.status.as_str().into(),
            _ => CellValue::Null,
        }
    }
}

/// One student as listed by the admin.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: u32,
    pub name: String,
    pub roll_number: String,
    pub branch: String,
    pub semester: u32,
    pub email: String,
    pub phone: String,
    pub total_fees: u64,
    pub paid_fees: u64,
    pub pending_fees: u64,
    pub last_payment_date: String,
}

impl Row for StudentRecord {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "rollNumber" => self.roll_number.as_str().into(),
            "branch" => self.branch.as_str().into(),
            "semester" => self.semester.into(),
            "email" => self.email.as_str().into(),
            "phone" => self.phone.as_str().into(),
            "totalFees" => self.total_fees.into(),
            "paidFees" => self.paid_fees.into(),
            "pendingFees" => self.pending_fees.into(),
            "lastPaymentDate" => self.last_payment_date.as_str().into(),
            _ => CellValue::Null,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    Paid,
    Pending,
}

impl StudentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        [Self::Paid, Self::Pending].into_iter().find(|s| s.as_str() == raw)
    }
}

/// Admin student-list filters. Empty fields do not filter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StudentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl StudentQuery {
    #[must_use]
    pub fn matches(&self, student: &StudentRecord) -> bool {
        if let Some(branch) = non_empty(self.branch.as_deref()).filter(|b| *b != ALL) {
            if student.branch != branch {
                return false;
            }
        }
        if let Some(semester) = non_empty(self.semester.as_deref()).filter(|s| *s != ALL) {
            if student.semester.to_string() != semester {
                return false;
            }
        }
        match self.status {
            Some(StudentStatus::Pending) if student.pending_fees == 0 => return false,
            Some(StudentStatus::Paid) if student.pending_fees != 0 => return false,
            _ => {}
        }
        if let Some(search) = non_empty(self.search.as_deref()) {
            let term = search.to_lowercase();
            return [&student.name, &student.roll_number, &student.email]
                .iter()
                .any(|field| field.to_lowercase().contains(&term));
        }
        true
    }
}

/// A configured fee that applies to a branch and semester (or `All`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeStructure {
    pub id: u32,
    #[serde(rename = "type")]
    pub fee_type: String,
    pub branch: String,
    pub semester: String,
    pub amount: u64,
    pub due_date: String,
    pub description: String,
    pub is_active: bool,
    pub late_charge: u64,
    pub created_on: String,
}

impl FeeStructure {
    /// Overwrite the editable fields from `draft`, keeping id and creation date.
    pub fn apply(&mut self, draft: FeeStructureDraft) {
        self.fee_type = draft.fee_type;
        self.branch = draft.branch;
        self.semester = draft.semester;
        self.amount = draft.amount;
        self.due_date = draft.due_date;
        self.description = draft.description;
        self.is_active = draft.is_active;
        self.late_charge = draft.late_charge;
    }
}

impl Row for FeeStructure {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.into(),
            "type" => self.fee_type.as_str().into(),
            "branch" => self.branch.as_str().into(),
            "semester" => self.semester.as_str().into(),
            "amount" => self.amount.into(),
            "dueDate" => self.due_date.as_str().into(),
            "description" => self.description.as_str().into(),
            "isActive" => self.is_active.into(),
            "lateCharge" => self.late_charge.into(),
            "createdOn" => self.created_on.as_str().into(),
            _ => CellValue::Null,
        }
    }
}

/// Editable fee-structure fields, as submitted by the add/edit form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeStructureDraft {
    #[serde(rename = "type")]
    pub fee_type: String,
    pub branch: String,
    pub semester: String,
    pub amount: u64,
    pub due_date: String,
    pub description: String,
    pub is_active: bool,
    pub late_charge: u64,
}

impl Default for FeeStructureDraft {
    fn default() -> Self {
        Self {
            fee_type: String::new(),
            branch: "All".to_owned(),
            semester: "All".to_owned(),
            amount: 0,
            due_date: String::new(),
            description: String::new(),
            is_active: true,
            late_charge: 0,
        }
    }
}

impl From<&FeeStructure> for FeeStructureDraft {
    fn from(fee: &FeeStructure) -> Self {
        Self {
            fee_type: fee.fee_type.clone(),
            branch: fee.branch.clone(),
            semester: fee.semester.clone(),
            amount: fee.amount,
            due_date: fee.due_date.clone(),
            description: fee.description.clone(),
            is_active: fee.is_active,
            late_charge: fee.late_charge,
        }
    }
}

/// Fee-structure list filters. A branch or semester filter also keeps rows
/// that apply to `All`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeStructureQuery {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub fee_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl FeeStructureQuery {
    #[must_use]
    pub fn matches(&self, fee: &FeeStructure) -> bool {
        if let Some(fee_type) = non_empty(self.fee_type.as_deref()) {
            if fee.fee_type != fee_type {
                return false;
            }
        }
        if let Some(branch) = non_empty(self.branch.as_deref()).filter(|b| *b != ALL) {
            if fee.branch != ALL && fee.branch != branch {
                return false;
            }
        }
        if let Some(semester) = non_empty(self.semester.as_deref()).filter(|s| *s != ALL) {
            if fee.semester != ALL && fee.semester != semester {
                return false;
            }
        }
        self.active.is_none_or(|active| fee.is_active == active)
    }
}

/// One row of the admin payment-tracking ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub student_name: String,
    pub roll_number: String,
    pub branch: String,
    pub semester: u32,
    pub fee_type: String,
    pub amount: u64,
    pub date: String,
    pub mode: String,
    pub reference: String,
    pub status: PaymentStatus,
}

impl Row for Transaction {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.as_str().into(),
            "studentName" => self.student_name.as_str().into(),
            "rollNumber" => self.roll_number.as_str().into(),
            "branch" => self.branch.as_str().into(),
            "semester" => self.semester.into(),
            "feeType" => self.fee_type.as_str().into(),
            "amount" => self.amount.into(),
            "date" => self.date.as_str().into(),
            "mode" => self.mode.as_str().into(),
            "reference" => self.reference.as_str().into(),
            "status" => self.status.as_str().into(),
            _ => CellValue::Null,
        }
    }
}

// =============================================================================
// REPORTS & REMINDERS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    #[default]
    CollectionSummary,
    StudentPayments,
    FeeStructures,
    PendingFees,
    OverdueFees,
    BranchCollection,
    SemesterCollection,
    PaymentModes,
}

impl ReportKind {
    pub const ALL: [Self; 8] = [
        Self::CollectionSummary,
        Self::StudentPayments,
        Self::FeeStructures,
        Self::PendingFees,
        Self::OverdueFees,
        Self::BranchCollection,
        Self::SemesterCollection,
        Self::PaymentModes,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CollectionSummary => "collection_summary",
            Self::StudentPayments => "student_payments",
            Self::FeeStructures => "fee_structures",
            Self::PendingFees => "pending_fees",
            Self::OverdueFees => "overdue_fees",
            Self::BranchCollection => "branch_collection",
            Self::SemesterCollection => "semester_collection",
            Self::PaymentModes => "payment_modes",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::CollectionSummary => "Collection Summary Report",
            Self::StudentPayments => "Student Payment Report",
            Self::FeeStructures => "Fee Structure Report",
            Self::PendingFees => "Pending Fees Report",
            Self::OverdueFees => "Overdue Payments Report",
            Self::BranchCollection => "Branch-wise Collection Report",
            Self::SemesterCollection => "Semester-wise Collection Report",
            Self::PaymentModes => "Payment Mode Analysis Report",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::CollectionSummary => "Summary of all fee collections in the selected period",
            Self::StudentPayments => "Detailed payment records for all students",
            Self::FeeStructures => "Current fee structures for all branches and semesters",
            Self::PendingFees => "List of all pending fee payments by students",
            Self::OverdueFees => "List of all overdue fee payments",
            Self::BranchCollection => "Fee collection statistics by branch",
            Self::SemesterCollection => "Fee collection statistics by semester",
            Self::PaymentModes => "Analysis of different payment modes used by students",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == raw)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Pdf,
    Excel,
    Csv,
}

impl ReportFormat {
    pub const ALL: [Self; 3] = [Self::Pdf, Self::Excel, Self::Csv];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "excel",
            Self::Csv => "csv",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Excel => "Excel",
            Self::Csv => "CSV",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == raw)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub report_type: ReportKind,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub fee_type: String,
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResult {
    pub success: bool,
    pub report_url: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRequest {
    pub student_ids: Vec<u32>,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderResult {
    pub success: bool,
    pub sent: usize,
    pub message: String,
}

// =============================================================================
// HELPERS
// =============================================================================

/// Wildcard branch/semester value.
pub const ALL: &str = "All";

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
