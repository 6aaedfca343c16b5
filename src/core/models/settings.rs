#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SettingsSection {
    #[default]
    General,
    Notifications,
    Team,
    ScheduleDefaults,
}

impl SettingsSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsSection::General => "General",
            SettingsSection::Notifications => "Notifications",
            SettingsSection::Team => "Team",
            SettingsSection::ScheduleDefaults => "Schedule defaults",
        }
    }

    pub fn all() -> Vec<SettingsSection> {
        vec![
            SettingsSection::General,
            SettingsSection::Notifications,
            SettingsSection::Team,
            SettingsSection::ScheduleDefaults,
        ]
    }

    // Toggles shown in the panel for this section, as (key, label)
    pub fn options(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            SettingsSection::General => &[
                ("clock_24h", "Use 24-hour clock"),
                ("compact_cards", "Compact dashboard cards"),
            ],
            SettingsSection::Notifications => &[
                ("notify_shift_change", "Email me when a shift changes"),
                ("notify_break", "Remind me before a break"),
            ],
            SettingsSection::Team => &[
                ("allow_swaps", "Allow shift swaps"),
            ],
            SettingsSection::ScheduleDefaults => &[
                ("week_starts_monday", "Start weeks on Monday"),
                ("default_recurring", "New shifts repeat weekly"),
            ],
        }
    }
}
