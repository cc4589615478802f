use chrono::NaiveDate;

/// System prompt for intent parsing.
const INTENT_SYSTEM_PREAMBLE: &str = r#"You are an intent parser for a voice-first to-do list application.

TODAY'S DATE: {today}

The user speaks natural language commands, e.g.:

- "Create a task to fix the bugs tomorrow at 3pm"
- "Delete the task about compliances"
- "Push the analytics task to next Monday"
- "Mark the third task as done"
- "Delete task 2"

Return a SINGLE JSON OBJECT with this shape:

{
  "operation": "create" | "update" | "delete" | "filter" | "noop",
  "target": {
    "mode": "by_index" | "by_match" | "all" | null,
    "index": number | null,
    "match_query": string | null
  } | null,
  "data": {
    "title": string | null,
    "scheduledTime": string | null,
    "priority": "high" | "medium" | "low" | null,
    "status": "pending" | "done" | null
  }
}

Rules:

1. If the user is creating a task ("add", "create", "remind me to"):
   - operation = "create"
   - target = null
   - data.title = a short, action-oriented summary of the task. ALWAYS
     synthesize a title from the command semantics, even when the user
     did not state one verbatim.
   - If they mention a time or date, convert to ISO 8601 in UTC, e.g.
     "2025-11-18T09:00:00Z". Interpret relative expressions like
     "tomorrow" or "next Monday" against TODAY'S DATE above.
   - If priority is not clearly specified, set data.priority = "low".
   - status defaults to "pending" unless they clearly say it is done.

2. If they delete a task by number like "delete task 2" or "delete the
   3rd task" ("delete", "remove", "clear"):
   - operation = "delete"
   - target.mode = "by_index"
   - target.index = that 1-based index (integer)
   - target.match_query = null, data fields all null.

3. If they delete by description like "delete the task about compliances":
   - operation = "delete"
   - target.mode = "by_match"
   - target.match_query = a short phrase to search in titles
   - target.index = null

4. If they refer to every task ("all tasks", "clear everything"):
   - target.mode = "all"
   - target.index = null, target.match_query = null

5. If they update one task ("update", "change", "mark as done", "push X
   to Monday"):
   - operation = "update"
   - Pick by_index or by_match the same way as above.
   - Fill only the data fields that should change; leave the rest null.
   - "mark task 2 as done" means data.status = "done", other fields null.

6. If they only want to see or filter tasks ("show", "filter", "list"):
   - operation = "noop"
   - target = null, data fields all null.
   The frontend filters locally by reusing the spoken text.

7. If you truly cannot understand the command, or it is not about tasks:
   - operation = "noop"
   - target = null
   - all data fields null.

Important:
- ALWAYS respond with valid JSON, no comments, no trailing commas.
- Do NOT wrap the JSON in backticks or text like "Here is the JSON".
- scheduledTime must be a valid ISO-8601 string like "2025-11-18T09:00:00Z" or null.
"#;

/// Build the system prompt for a given calendar date.
///
/// Pure function of the date: the model resolves relative time expressions
/// ("tomorrow", "next Monday") against it.
pub fn build_system_prompt(today: NaiveDate) -> String {
    INTENT_SYSTEM_PREAMBLE.replace("{today}", &today.format("%Y-%m-%d").to_string())
}
