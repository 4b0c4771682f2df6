/// Above this many LCS cells the diff degrades to delete-all/insert-all.
const MAX_CELLS: usize = 4_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Equal,
    Delete,
    Insert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub kind: ChangeKind,
    pub text: String,
}

/// Splits text into words, whitespace runs and single line breaks.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<u8> = None;

    for (idx, ch) in text.char_indices() {
        let class = if ch == '\n' {
            0
        } else if ch.is_whitespace() {
            1
        } else {
            2
        };
        match current {
            Some(prev) if prev == class && class != 0 => {}
            Some(_) => {
                tokens.push(&text[start..idx]);
                start = idx;
            }
            None => start = idx,
        }
        current = Some(class);
    }
    if current.is_some() {
        tokens.push(&text[start..]);
    }
    tokens
}

fn push(changes: &mut Vec<Change>, kind: ChangeKind, text: &str) {
    if text.is_empty() {
        return;
    }
    match changes.last_mut() {
        Some(last) if last.kind == kind => last.text.push_str(text),
        _ => changes.push(Change {
            kind,
            text: text.to_string(),
        }),
    }
}

/// Word-level edit script turning `original` into `revised`.
pub fn diff_words(original: &str, revised: &str) -> Vec<Change> {
    let old = tokenize(original);
    let new = tokenize(revised);
    let mut changes = Vec::new();

    if old.len().saturating_mul(new.len()) > MAX_CELLS {
        push(&mut changes, ChangeKind::Delete, original);
        push(&mut changes, ChangeKind::Insert, revised);
        return changes;
    }

    // lcs[i][j] = LCS length of old[i..] and new[j..]
    let width = new.len() + 1;
    let mut lcs = vec![0u32; (old.len() + 1) * width];
    for i in (0..old.len()).rev() {
        for j in (0..new.len()).rev() {
            lcs[i * width + j] = if old[i] == new[j] {
                lcs[(i + 1) * width + j + 1] + 1
            } else {
                lcs[(i + 1) * width + j].max(lcs[i * width + j + 1])
            };
        }
    }

    let (mut i, mut j) = (0, 0);
    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            push(&mut changes, ChangeKind::Equal, old[i]);
            i += 1;
            j += 1;
        } else if lcs[(i + 1) * width + j] >= lcs[i * width + j + 1] {
            push(&mut changes, ChangeKind::Delete, old[i]);
            i += 1;
        } else {
            push(&mut changes, ChangeKind::Insert, new[j]);
            j += 1;
        }
    }
    for token in &old[i..] {
        push(&mut changes, ChangeKind::Delete, token);
    }
    for token in &new[j..] {
        push(&mut changes, ChangeKind::Insert, token);
    }
    changes
}
