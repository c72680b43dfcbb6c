//! Admin reports: revenue breakdowns from the ledger and the report
//! generator form.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use leptos::prelude::*;
use portal::filter::DateRangePreset;
use portal::fixtures::{BRANCHES, FEE_TYPES, SEMESTERS};
use portal::format::{calculate_percentage, format_currency, format_date, parse_date};
use portal::model::{ALL, PaymentStatus, ReportFormat, ReportKind, ReportRequest, Transaction};

use crate::components::alert::{Alert, Notice};
use crate::components::card::Card;
use crate::components::field::{BoundSelect, SelectField};
use crate::net::api;
use crate::util::clock;
use crate::util::request::{scoped_generation, spawn_guarded};

/// Preset value that leaves hand-entered dates alone.
pub const CUSTOM_RANGE: &str = "custom";

pub const REPORT_PRESETS: [DateRangePreset; 6] = [
    DateRangePreset::Today,
    DateRangePreset::Yesterday,
    DateRangePreset::Last7Days,
    DateRangePreset::ThisMonth,
    DateRangePreset::LastMonth,
    DateRangePreset::ThisYear,
];

// =============================================================================
// PURE HELPERS
// =============================================================================

/// Successful revenue grouped by `key`, largest first.
pub fn revenue_by<F>(transactions: &[Transaction], key: F) -> Vec<(String, u64)>
where
    F: Fn(&Transaction) -> &str,
{
    let mut groups: Vec<(String, u64)> = Vec::new();
    for tx in transactions.iter().filter(|t| t.status == PaymentStatus::Success) {
        let name = key(tx);
        match groups.iter_mut().find(|(g, _)| g == name) {
            Some((_, total)) => *total += tx.amount,
            None => groups.push((name.to_owned(), tx.amount)),
        }
    }
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups
}

/// Raw generator inputs, as held by the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportForm {
    pub kind: String,
    pub start_date: String,
    pub end_date: String,
    pub branch: String,
    pub semester: String,
    pub fee_type: String,
    pub format: String,
}

impl Default for ReportForm {
    fn default() -> Self {
        Self {
            kind: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            branch: ALL.to_owned(),
            semester: ALL.to_owned(),
            fee_type: ALL.to_owned(),
            format: ReportFormat::default().as_str().to_owned(),
        }
    }
}

impl ReportForm {
    /// Request for these inputs.
    ///
    /// # Errors
    ///
    /// Returns the message to show when no report is picked or the dates are
    /// out of order.
    pub fn request(&self) -> Result<ReportRequest, &'static str> {
        let report_type = ReportKind::parse(&self.kind).ok_or("Please select a report type")?;
        if let (Some(start), Some(end)) = (parse_date(&self.start_date), parse_date(&self.end_date)) {
            if start > end {
                return Err("Start date must be on or before the end date");
            }
        }
        Ok(ReportRequest {
            report_type,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            branch: self.branch.clone(),
            semester: self.semester.clone(),
            fee_type: self.fee_type.clone(),
            format: ReportFormat::parse(&self.format).unwrap_or_default(),
        })
    }

    /// Fill the dates from a preset; [`CUSTOM_RANGE`] or unknown values keep
    /// them.
    pub fn apply_preset(&mut self, preset: &str, today: time::Date) {
        if let Some(preset) = DateRangePreset::parse(preset) {
            let (start, end) = preset.report_dates(today);
            self.start_date = start.to_string();
            self.end_date = end.to_string();
        }
    }
}

/// A report produced during this visit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedReport {
    pub title: &'static str,
    pub format: &'static str,
    pub range: String,
    pub url: String,
}

impl GeneratedReport {
    #[must_use]
    pub fn new(request: &ReportRequest, url: String) -> Self {
        Self {
            title: request.report_type.title(),
            format: request.format.label(),
            range: format!("{} to {}", format_date(&request.start_date), format_date(&request.end_date)),
            url,
        }
    }
}

// =============================================================================
// COMPONENTS
// =============================================================================

#[component]
fn Breakdown(#[prop(into)] title: String, rows: Signal<Vec<(String, u64)>>) -> impl IntoView {
    view! {
        <Card title=title class="h-100">
            {move || {
                let rows = rows.get();
                if rows.is_empty() {
                    return view! { <p class="text-muted mb-0">"No collections yet"</p> }.into_any();
                }
                let total = rows.iter().map(|(_, v)| v).sum::<u64>();
                rows.into_iter()
                    .map(|(name, amount)| {
                        let pct = calculate_percentage(amount, total);
                        view! {
                            <div class="mb-2">
                                <div class="d-flex justify-content-between small">
                                    <span>{name}</span>
                                    <span class="fw-medium">{format!("{} ({pct}%)", format_currency(amount))}</span>
                                </div>
                                <div class="progress progress-thin">
                                    <div class="progress-bar" style=format!("width: {pct}%")></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </Card>
    }
}

fn pick_list(all_label: &str, values: &[&str]) -> Vec<(String, String)> {
    std::iter::once((ALL.to_owned(), all_label.to_owned()))
        .chain(values.iter().map(|v| ((*v).to_owned(), (*v).to_owned())))
        .collect()
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let ledger_generation = scoped_generation();
    let report_generation = scoped_generation();

    let ledger = RwSignal::new(Vec::<Transaction>::new());
    let notice = RwSignal::new(None::<Notice>);
    let preset = RwSignal::new(DateRangePreset::ThisMonth.as_str().to_owned());
    let form = RwSignal::new(ReportForm::default());
    let generating = RwSignal::new(false);
    let generated = RwSignal::new(Vec::<GeneratedReport>::new());

    spawn_guarded(&ledger_generation, api::transactions(), move |result| match result {
        Ok(list) => ledger.set(list),
        Err(message) => notice.set(Some(Notice::error(message))),
    });

    Effect::new(move || {
        let chosen = preset.get();
        form.update(|f| f.apply_preset(&chosen, clock::today()));
    });

    let by_fee_type = Signal::derive(move || ledger.with(|l| revenue_by(l, |t| t.fee_type.as_str())));
    let by_branch = Signal::derive(move || ledger.with(|l| revenue_by(l, |t| t.branch.as_str())));
    let by_mode = Signal::derive(move || ledger.with(|l| revenue_by(l, |t| t.mode.as_str())));

    let generate = Callback::new(move |()| {
        let request = match form.with_untracked(ReportForm::request) {
            Ok(request) => request,
            Err(message) => {
                notice.set(Some(Notice::error(message)));
                return;
            }
        };
        generating.set(true);
        spawn_guarded(
            &report_generation,
            {
                let request = request.clone();
                async move { api::generate_report(&request).await }
            },
            move |result| {
                generating.set(false);
                match result {
                    Ok(done) => {
                        generated.update(|list| list.insert(0, GeneratedReport::new(&request, done.report_url)));
                        notice.set(Some(Notice::success(done.message)));
                    }
                    Err(message) => notice.set(Some(Notice::error(message))),
                }
            },
        );
    });

    let kind_options = std::iter::once((String::new(), "Select report type".to_owned()))
        .chain(ReportKind::ALL.iter().map(|k| (k.as_str().to_owned(), k.title().to_owned())))
        .collect::<Vec<_>>();
    let preset_options = REPORT_PRESETS
        .iter()
        .map(|p| (p.as_str().to_owned(), p.label().to_owned()))
        .chain(std::iter::once((CUSTOM_RANGE.to_owned(), "Custom Range".to_owned())))
        .collect::<Vec<_>>();
    let format_options =
        ReportFormat::ALL.iter().map(|f| (f.as_str().to_owned(), f.label().to_owned())).collect::<Vec<_>>();

    let field = move |read: fn(&ReportForm) -> &String| Signal::derive(move || form.with(|f| read(f).clone()));

    let catalogue = ReportKind::ALL
        .iter()
        .map(|kind| {
            let value = kind.as_str();
            view! {
                <div class="col-md-6 col-xl-3">
                    <div
                        class=move || {
                            if form.with(|f| f.kind == value) { "card h-100 report-card border-primary" } else { "card h-100 report-card" }
                        }
                        on:click=move |_| form.update(|f| f.kind = value.to_owned())
                    >
                        <div class="card-body">
                            <h6 class="fw-bold">{kind.title()}</h6>
                            <p class="small text-muted mb-0">{kind.description()}</p>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="reports-page">
            <h1 class="h3 mb-4">"Reports & Analytics"</h1>
            <Alert notice=notice/>
            <div class="row g-4 mb-4">
                <div class="col-lg-4">
                    <Breakdown title="Revenue by Fee Type" rows=by_fee_type/>
                </div>
                <div class="col-lg-4">
                    <Breakdown title="Revenue by Branch" rows=by_branch/>
                </div>
                <div class="col-lg-4">
                    <Breakdown title="Payment Mode Distribution" rows=by_mode/>
                </div>
            </div>
            <h2 class="h5 mb-3">"Available Reports"</h2>
            <div class="row g-3 mb-4">{catalogue}</div>
            <div class="card shadow-sm mb-4">
                <div class="card-header fw-semibold">"Generate Report"</div>
                <form
                    class="card-body row"
                    novalidate
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        generate.run(());
                    }
                >
                    <BoundSelect
                        class="col-md-4 mb-3"
                        label="Report Type"
                        value=field(|f| &f.kind)
                        options=kind_options
                        on_change=Callback::new(move |v: String| form.update(|f| f.kind = v))
                    />
                    <div class="col-md-4 mb-3">
                        <SelectField label="Date Range" value=preset options=preset_options/>
                    </div>
                    <BoundSelect
                        class="col-md-4 mb-3"
                        label="Format"
                        value=field(|f| &f.format)
                        options=format_options
                        on_change=Callback::new(move |v: String| form.update(|f| f.format = v))
                    />
                    <div class="col-md-6 mb-3">
                        <label class="form-label">"Start Date"</label>
                        <input
                            type="date"
                            class="form-control"
                            prop:value=move || form.with(|f| f.start_date.clone())
                            on:input=move |ev| {
                                let date = event_target_value(&ev);
                                preset.set(CUSTOM_RANGE.to_owned());
                                form.update(|f| f.start_date = date);
                            }
                        />
                    </div>
                    <div class="col-md-6 mb-3">
                        <label class="form-label">"End Date"</label>
                        <input
                            type="date"
                            class="form-control"
                            prop:value=move || form.with(|f| f.end_date.clone())
                            on:input=move |ev| {
                                let date = event_target_value(&ev);
                                preset.set(CUSTOM_RANGE.to_owned());
                                form.update(|f| f.end_date = date);
                            }
                        />
                    </div>
                    <BoundSelect
                        class="col-md-4 mb-3"
                        label="Branch"
                        value=field(|f| &f.branch)
                        options=pick_list("All Branches", &BRANCHES)
                        on_change=Callback::new(move |v: String| form.update(|f| f.branch = v))
                    />
                    <BoundSelect
                        class="col-md-4 mb-3"
                        label="Semester"
                        value=field(|f| &f.semester)
                        options=pick_list("All Semesters", &SEMESTERS)
                        on_change=Callback::new(move |v: String| form.update(|f| f.semester = v))
                    />
                    <BoundSelect
                        class="col-md-4 mb-3"
                        label="Fee Type"
                        value=field(|f| &f.fee_type)
                        options=pick_list("All Fee Types", &FEE_TYPES)
                        on_change=Callback::new(move |v: String| form.update(|f| f.fee_type = v))
                    />
                    <div class="col-12">
                        <button type="submit" class="btn btn-primary" disabled=move || generating.get()>
                            {move || if generating.get() { "Generating..." } else { "Generate Report" }}
                        </button>
                    </div>
                </form>
            </div>
            <Show when=move || generated.with(|g| !g.is_empty())>
                <Card title="Generated This Session">
                    <ul class="list-group list-group-flush">
                        {move || {
                            generated
                                .get()
                                .into_iter()
                                .map(|report| {
                                    view! {
                                        <li class="list-group-item d-flex justify-content-between align-items-center">
                                            <div>
                                                <div class="fw-medium">{report.title}</div>
                                                <div class="small text-muted">{format!("{} · {}", report.range, report.format)}</div>
                                            </div>
                                            <a class="btn btn-sm btn-outline-primary" href=report.url>"Download"</a>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Card>
            </Show>
        </div>
    }
}
