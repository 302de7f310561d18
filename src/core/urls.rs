#[derive(Debug)]
pub struct ApiUrls;

impl ApiUrls {
    // Availability slots - JSON APIs
    pub const SLOTS: &'static str = "/api/slots";
    pub const SLOT_BY_ID: &'static str = "/api/slots/{id}";

    // Meetings - JSON APIs
    pub const MEETINGS: &'static str = "/api/meetings";
    pub const MEETING_ADHOC: &'static str = "/api/meetings/adhoc";
    pub const MEETING_BY_ID: &'static str = "/api/meetings/{id}";
    pub const MEETING_CONFIRM: &'static str = "/api/meetings/{id}/confirm";
    pub const MEETING_REJECT: &'static str = "/api/meetings/{id}/reject";
    pub const MEETING_CANCEL: &'static str = "/api/meetings/{id}/cancel";
    pub const MEETING_RESCHEDULE: &'static str = "/api/meetings/{id}/reschedule";
    pub const RESCHEDULE_RESOLVE: &'static str = "/api/reschedules/{id}/resolve";

    // Batch jobs - externally triggerable, idempotent
    pub const JOBS_REMINDERS: &'static str = "/api/jobs/reminders";
    pub const JOBS_COMPLETIONS: &'static str = "/api/jobs/completions";

    // Health
    pub const HEALTH: &'static str = "/health";
}
