/// Keywords that end a captured section. Shared by every section so that an
/// "education" capture stops at an "experience" heading and vice versa.
pub const STOP_MARKERS: &[&str] = &[
    "skills",
    "projects",
    "certifications",
    "languages",
    "hobbies",
    "experience",
    "education",
];

/// Resume sections captured by [`extract_section`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Education,
    Experience,
}

impl Section {
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Education => "education",
            Section::Experience => "experience",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureState {
    Searching,
    Capturing,
}

/// Captures the lines following the first line that mentions `section`.
///
/// The heading line itself is skipped. Capture ends at the first blank line or
/// the first line containing a stop marker. Returns `None` when the heading is
/// missing or nothing was captured.
pub fn extract_section(text: &str, section: Section) -> Option<String> {
    let heading = section.heading();
    let mut state = CaptureState::Searching;
    let mut content = String::new();

    for line in text.split('\n') {
        let lowered = line.to_lowercase();
        if lowered.contains(heading) {
            state = CaptureState::Capturing;
            continue;
        }
        if state == CaptureState::Searching {
            continue;
        }
        if line.trim().is_empty() || is_stop_line(&lowered) {
            break;
        }
        content.push_str(line);
        content.push('\n');
    }

    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn is_stop_line(lowered: &str) -> bool {
    STOP_MARKERS.iter().any(|marker| lowered.contains(marker))
}
