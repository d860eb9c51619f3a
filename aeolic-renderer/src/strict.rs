//! Missing-key check for `{% if %}` / `{% elif %}` conditions.
//!
//! Tera errors on a missing variable inside `{{ }}` but evaluates a missing
//! identifier in a condition as false. This pass walks the parsed template
//! before rendering and reports such identifiers. A name is exempt when:
//!
//! - the same condition tests it with `is defined` / `is undefined`
//!   (the guard also covers the branch body);
//! - it goes through the `default` filter;
//! - it is bound by an enclosing `for` loop or a `set`.
//!
//! Every branch is checked, whichever one would be taken at render time.

use serde_json::Value;
use tera::ast::{Expr, ExprVal, If, Node};
use tera::Context;

/// First condition identifier that does not resolve in `ctx`, if any.
pub(crate) fn missing_condition_variable(ast: &[Node], ctx: &Context) -> Option<String> {
    Scope {
        ctx,
        locals: Vec::new(),
        guards: Vec::new(),
    }
    .nodes(ast)
}

struct Scope<'a> {
    ctx: &'a Context,
    /// Names bound by `for` / `set`.
    locals: Vec<String>,
    /// Paths tested with `is defined` in an enclosing condition.
    guards: Vec<String>,
}

impl Scope<'_> {
    fn nodes(&mut self, nodes: &[Node]) -> Option<String> {
        nodes.iter().find_map(|node| self.node(node))
    }

    fn node(&mut self, node: &Node) -> Option<String> {
        match node {
            Node::If(branches, _) => self.branches(branches),
            Node::Forloop(_, forloop, _) => {
                let mark = self.locals.len();
                self.locals.push("loop".to_owned());
                self.locals.push(forloop.value.clone());
                self.locals.extend(forloop.key.clone());
                let found = self.nodes(&forloop.body);
                self.locals.truncate(mark);
                found.or_else(|| forloop.empty_body.as_deref().and_then(|b| self.nodes(b)))
            }
            Node::Set(_, set) => {
                self.locals.push(set.key.clone());
                None
            }
            Node::Block(_, block, _) => self.nodes(&block.body),
            Node::FilterSection(_, section, _) => self.nodes(&section.body),
            _ => None,
        }
    }

    fn branches(&mut self, branches: &If) -> Option<String> {
        for (_, condition, body) in &branches.conditions {
            let mark = self.guards.len();
            collect_guards(condition, &mut self.guards);
            let found = self.condition(condition).or_else(|| self.nodes(body));
            self.guards.truncate(mark);
            if found.is_some() {
                return found;
            }
        }
        branches
            .otherwise
            .as_ref()
            .and_then(|(_, body)| self.nodes(body))
    }

    fn condition(&self, expr: &Expr) -> Option<String> {
        match &expr.val {
            ExprVal::Ident(ident) => {
                let defaulted = expr.filters.iter().any(|f| f.name == "default");
                if defaulted || self.is_bound(ident) || resolves(self.ctx, ident) {
                    None
                } else {
                    Some(ident.clone())
                }
            }
            ExprVal::Logic(logic) => self
                .condition(&logic.lhs)
                .or_else(|| self.condition(&logic.rhs)),
            _ => None,
        }
    }

    fn is_bound(&self, ident: &str) -> bool {
        let root = root_of(ident);
        self.locals.iter().any(|l| l == root)
            || self.guards.iter().any(|g| {
                ident == g
                    || ident
                        .strip_prefix(g.as_str())
                        .is_some_and(|rest| rest.starts_with('.') || rest.starts_with('['))
            })
    }
}

fn collect_guards(expr: &Expr, out: &mut Vec<String>) {
    match &expr.val {
        ExprVal::Test(test) if test.name == "defined" || test.name == "undefined" => {
            out.push(test.ident.clone());
        }
        ExprVal::Logic(logic) => {
            collect_guards(&logic.lhs, out);
            collect_guards(&logic.rhs, out);
        }
        _ => {}
    }
}

fn root_of(ident: &str) -> &str {
    ident.split(['.', '[']).next().unwrap_or(ident)
}

/// Follow a dotted path (`user.name`, `items.0`) through the context.
///
/// Bracketed segments are evaluated by tera at render time; only the part
/// before the first `[` is checked here.
fn resolves(ctx: &Context, ident: &str) -> bool {
    let path = ident.split('[').next().unwrap_or(ident);
    let mut segments = path.split('.');
    let Some(mut value) = segments.next().and_then(|root| ctx.get(root)) else {
        return false;
    };
    for segment in segments {
        let next = match value {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        match next {
            Some(v) => value = v,
            None => return false,
        }
    }
    true
}
