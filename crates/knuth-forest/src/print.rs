//! Text dumps of arena trees.

use crate::types::Node;

/// Renders one child subtree given the indentation prefix for its lines.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Hangs one branch per child under the current line.
///
/// `render` receives the child and the prefix its own subtree lines must
/// carry: `│` continues the rail for every child except the last.
pub fn print_branches<T, F>(tab: &str, children: &[T], render: F) -> String
where
    T: Copy,
    F: Fn(T, &str) -> String,
{
    let mut out = String::new();
    let Some((last, init)) = children.split_last() else {
        return out;
    };
    let rail = format!("{tab}│  ");
    for &child in init {
        out.push_str(&format!("\n{tab}├─ {}", render(child, &rail)));
    }
    let tail = format!("{tab}   ");
    out.push_str(&format!("\n{tab}└─ {}", render(*last, &tail)));
    out
}

/// Prints a left/right pair, marking each side with an arrow.
pub fn print_binary(tab: &str, left: Option<&PrintChild>, right: Option<&PrintChild>) -> String {
    let mut out = String::new();
    if let Some(l) = left {
        out.push('\n');
        out.push_str(tab);
        out.push_str("← ");
        out.push_str(&l(&format!("{tab}  ")));
    }
    if let Some(r) = right {
        out.push('\n');
        out.push_str(tab);
        out.push_str("→ ");
        out.push_str(&r(&format!("{tab}  ")));
    }
    out
}

/// Dumps a binary arena tree; `label` formats a single node.
pub fn print_node<N, F>(arena: &[N], idx: u32, tab: &str, label: &F) -> String
where
    N: Node,
    F: Fn(&N) -> String,
{
    let node = &arena[idx as usize];
    let left = node
        .l()
        .map(|l| move |t: &str| print_node(arena, l, t, label));
    let right = node
        .r()
        .map(|r| move |t: &str| print_node(arena, r, t, label));
    let children = print_binary(
        tab,
        left.as_ref().map(|f| f as &PrintChild),
        right.as_ref().map(|f| f as &PrintChild),
    );
    format!("{}{children}", label(node))
}
