/// Strip markdown code blocks from a response.
///
/// Models occasionally fence JSON output in ```json blocks even when told
/// not to; callers that expect raw JSON run responses through this first.
pub fn strip_code_blocks(response: &str) -> &str {
    response
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}
