const TITLE_FALLBACK: &str = "Your Topic";
const HOOK_FALLBACK: &str = "success";
const MAIN_POINT_FALLBACK: &str = "Most people miss this simple trick";

/// Fills the fixed four-scene shorts template with a prompt
#[derive(Debug, Default, Clone)]
pub struct ScriptService;

impl ScriptService {
    pub fn new() -> Self {
        Self
    }

    /// Render the script for `prompt`.
    ///
    /// The prompt fills the title, hook and main point. An empty prompt
    /// gives each of those its own fallback text.
    pub fn generate(&self, prompt: &str) -> String {
        let script = format!(
            "🎬 AI SCRIPT FOR: {title}\n\
             \n\
             [SCENE 1] 🚀 HOOK: Fast graphics + bold text\n\
             \"STOP! This changes EVERYTHING about {hook}\"\n\
             \n\
             [SCENE 2] 💡 MAIN POINT: Dynamic footage\x20\x20\n\
             \"{main}\"\n\
             \n\
             [SCENE 3] 📋 SOLUTION: Step graphics\n\
             \"3 steps → Results: 1️⃣ Start 2️⃣ Continue 3️⃣ Win\"\n\
             \n\
             [SCENE 4] 🔥 CTA: Subscribe animation\n\
             \"Comment 'YES' 👇 Subscribe for more!\"\n\
             \n\
             ⏱️ Duration: 45s | 📱 Perfect for Shorts",
            title = or_fallback(prompt, TITLE_FALLBACK),
            hook = or_fallback(prompt, HOOK_FALLBACK),
            main = or_fallback(prompt, MAIN_POINT_FALLBACK),
        );

        tracing::debug!(
            prompt_length = prompt.len(),
            script_length = script.len(),
            "Script generated"
        );

        script
    }
}

fn or_fallback<'a>(prompt: &'a str, fallback: &'a str) -> &'a str {
    if prompt.is_empty() {
        fallback
    } else {
        prompt
    }
}
