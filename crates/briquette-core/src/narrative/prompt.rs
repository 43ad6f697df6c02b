//! Prompt for the logistics narrative.

/// Section headings the narrative is asked to contain, in order.
pub const SECTION_HEADINGS: [&str; 4] = [
    "## 📋 Project Overview",
    "## 🚚 Logistics Estimates",
    "## ⏱️ Application Time",
    "## 💡 Pro Tips",
];

/// Builds the "Logistics & Application Plan" prompt for an estimate.
pub fn logistics_prompt(acres: f64, units_needed: u64) -> String {
    let [overview, logistics, timing, tips] = SECTION_HEADINGS;

    format!(
        r#"I am planning a land management project.
Input Data:
- Area: {acres} acres
- Product: {units_needed} briquettes (standard size, roughly similar to a hockey puck or charcoal briquette).
- Coverage: 1 per 100 sq ft.

Please generate a helpful "Logistics & Application Plan" in Markdown format.
Structure the response strictly as follows:

{overview}
[A 1-sentence summary of the scale of this operation, e.g. "Small residential task" vs "Large agricultural operation"].

{logistics}
- **Estimated Total Weight:** [Calculate approx weight assuming 0.5 oz per briquette, convert to lbs].
- **Volume Visualization:** [A metaphor for the volume, e.g. "Fits in a backpack" or "Requires a pickup truck bed"].

{timing}
- **Manual Application:** [Estimated time for one person to walk and drop].
- **Mechanized/Team Application:** [Estimated time if using a spreader or team, if applicable for this scale].

{tips}
1. [Tip about grid patterns or marking territory].
2. [Tip about storage or handling].
3. [Tip about safety or environmental checking].

Keep the tone professional, encouraging, and concise. Do not include conversational filler.
"#
    )
}
