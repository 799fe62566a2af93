//! Minutes of Meeting instruction prompt

/// Header row the model is asked to produce
pub const MOM_TABLE_HEADER: &str =
    "| Particulars (To-Dos) | Deadline | Status (Completed / Pending / Not Started) | % Completion |";

const MOM_INSTRUCTION: &str = r#"You are an intelligent assistant tasked with generating structured Minutes of Meeting (MoM) based on handwritten notes and to-dos provided as images.
Your job is to extract text from the images and organize the information into a clean, professional table with the following columns:
| Particulars (To-Dos) | Deadline | Status (Completed / Pending / Not Started) | % Completion |

Requirements:
- OCR: Accurately read and transcribe handwritten text from the uploaded images.
- Task Identification: Identify individual to-do items, action points, or tasks from the transcribed text.
- Deadline Detection: Detect any mentioned dates or inferred deadlines related to each task. If no deadline is present, leave the field blank or mark as "TBD."
- Status Assignment: Based on context (e.g., checkmarks, strikethroughs, annotations like "done", "in progress", "to-do", etc.), assign a task status:
  ✅ Completed
  🕒 Pending
  ⏳ Not Started
- Completion %: Estimate a percentage completion (e.g., 0%, 50%, 100%) based on the language or markings (e.g., "half done", "in progress", "✓✓✓", etc.).
"#;

/// The static instruction that accompanies an image (Value Object)
///
/// Not parameterized: every call carries the same text. Classification
/// rules are left to the model's judgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionPrompt {
    text: &'static str,
}

impl InstructionPrompt {
    /// The Minutes of Meeting extraction instruction
    pub const fn minutes_of_meeting() -> Self {
        Self {
            text: MOM_INSTRUCTION,
        }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }
}

impl Default for InstructionPrompt {
    fn default() -> Self {
        Self::minutes_of_meeting()
    }
}

impl std::fmt::Display for InstructionPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
