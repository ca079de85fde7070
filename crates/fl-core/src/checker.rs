//! AST checker validating DataFrame column operations
//!
//! The checker walks a parsed module once in source order. It records
//! pandas import aliases, resolves simple variable bindings one level
//! deep, registers frame trackers for recognized constructor and method
//! calls, applies subscript writes to the trackers, and validates
//! subscript reads against them. Everything it cannot recognize silently
//! degrades; the only user-visible output is the diagnostics vector.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

use rustpython_ast as ast;

use fl_python::{parse_module, LineIndex, ParsedModule, SourceRegion};

use crate::diagnostic::{self, Diagnostic};
use crate::error::{CheckError, CheckResult};
use crate::extract;
use crate::registry::{CallArgs, ConstructorRegistry, MethodRegistry};
use crate::tracker::FrameTracker;
use crate::value::{shallow_value, Value};

/// Module whose imports mark frame-producing calls
const TRACKED_LIBRARY: &str = "pandas";

/// Result of checking one file
#[derive(Debug)]
pub struct CheckerResult {
    /// Diagnostics in source order
    pub diagnostics: Vec<Diagnostic>,
    /// Final schema of every tracked frame variable
    pub frames: BTreeMap<String, FrameTracker>,
}

/// A variable binding recorded during traversal
#[derive(Debug, Clone)]
struct Binding {
    value: Value,
    region: SourceRegion,
}

/// Check Python source text
pub fn check(source: &str) -> CheckResult<CheckerResult> {
    let module = parse_module(source, "<source>")?;
    Ok(check_module(&module))
}

/// Check a Python file on disk
pub fn check_file(path: &Path) -> CheckResult<CheckerResult> {
    let source = std::fs::read_to_string(path).map_err(|source| CheckError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let module = parse_module(&source, &path.display().to_string())?;
    Ok(check_module(&module))
}

/// Check an already-parsed module
pub fn check_module(module: &ParsedModule) -> CheckerResult {
    let mut checker = Checker::new(&module.index);
    checker.visit_body(&module.body);
    checker.finish()
}

/// Single-pass AST visitor; all state is file-local
pub struct Checker<'a> {
    index: &'a LineIndex,
    constructors: ConstructorRegistry,
    methods: MethodRegistry,
    pandas_aliases: BTreeSet<String>,
    bindings: BTreeMap<String, Binding>,
    frames: BTreeMap<String, FrameTracker>,
    diagnostics: Vec<Diagnostic>,
    handled_subscripts: HashSet<SourceRegion>,
}

impl<'a> Checker<'a> {
    /// Create a checker for one file
    pub fn new(index: &'a LineIndex) -> Self {
        Self {
            index,
            constructors: ConstructorRegistry::builtin(),
            methods: MethodRegistry::builtin(),
            pandas_aliases: BTreeSet::new(),
            bindings: BTreeMap::new(),
            frames: BTreeMap::new(),
            diagnostics: Vec::new(),
            handled_subscripts: HashSet::new(),
        }
    }

    /// Consume the checker, yielding diagnostics and final frame schemas
    pub fn finish(self) -> CheckerResult {
        CheckerResult {
            diagnostics: self.diagnostics,
            frames: self.frames,
        }
    }

    /// Walk statements in source order
    pub fn visit_body(&mut self, body: &[ast::Stmt]) {
        for stmt in body {
            self.visit_stmt(stmt);
        }
    }

    fn visit_stmt(&mut self, stmt: &ast::Stmt) {
        match stmt {
            ast::Stmt::Import(import) => self.visit_import(import),
            ast::Stmt::Assign(assign) => self.visit_assign(assign),
            ast::Stmt::Expr(expr_stmt) => {
                self.try_inplace_method_call(&expr_stmt.value);
                self.visit_expr(&expr_stmt.value);
            }
            ast::Stmt::AugAssign(s) => {
                self.visit_expr(&s.target);
                self.visit_expr(&s.value);
            }
            ast::Stmt::AnnAssign(s) => {
                if let Some(value) = &s.value {
                    self.visit_expr(value);
                }
            }
            ast::Stmt::Return(s) => {
                if let Some(value) = &s.value {
                    self.visit_expr(value);
                }
            }
            ast::Stmt::Delete(s) => {
                for target in &s.targets {
                    self.visit_expr(target);
                }
            }
            ast::Stmt::Assert(s) => {
                self.visit_expr(&s.test);
                if let Some(msg) = &s.msg {
                    self.visit_expr(msg);
                }
            }
            ast::Stmt::Raise(s) => {
                if let Some(exc) = &s.exc {
                    self.visit_expr(exc);
                }
                if let Some(cause) = &s.cause {
                    self.visit_expr(cause);
                }
            }
            ast::Stmt::If(s) => {
                self.visit_expr(&s.test);
                self.visit_body(&s.body);
                self.visit_body(&s.orelse);
            }
            ast::Stmt::While(s) => {
                self.visit_expr(&s.test);
                self.visit_body(&s.body);
                self.visit_body(&s.orelse);
            }
            ast::Stmt::For(s) => {
                self.visit_expr(&s.target);
                self.visit_expr(&s.iter);
                self.visit_body(&s.body);
                self.visit_body(&s.orelse);
            }
            ast::Stmt::AsyncFor(s) => {
                self.visit_expr(&s.target);
                self.visit_expr(&s.iter);
                self.visit_body(&s.body);
                self.visit_body(&s.orelse);
            }
            ast::Stmt::With(s) => {
                for item in &s.items {
                    self.visit_expr(&item.context_expr);
                }
                self.visit_body(&s.body);
            }
            ast::Stmt::AsyncWith(s) => {
                for item in &s.items {
                    self.visit_expr(&item.context_expr);
                }
                self.visit_body(&s.body);
            }
            ast::Stmt::FunctionDef(s) => self.visit_body(&s.body),
            ast::Stmt::AsyncFunctionDef(s) => self.visit_body(&s.body),
            ast::Stmt::ClassDef(s) => self.visit_body(&s.body),
            ast::Stmt::Try(s) => {
                self.visit_body(&s.body);
                for handler in &s.handlers {
                    let ast::ExceptHandler::ExceptHandler(h) = handler;
                    self.visit_body(&h.body);
                }
                self.visit_body(&s.orelse);
                self.visit_body(&s.finalbody);
            }
            ast::Stmt::TryStar(s) => {
                self.visit_body(&s.body);
                for handler in &s.handlers {
                    let ast::ExceptHandler::ExceptHandler(h) = handler;
                    self.visit_body(&h.body);
                }
                self.visit_body(&s.orelse);
                self.visit_body(&s.finalbody);
            }
            ast::Stmt::Match(s) => {
                self.visit_expr(&s.subject);
                for case in &s.cases {
                    if let Some(guard) = &case.guard {
                        self.visit_expr(guard);
                    }
                    self.visit_body(&case.body);
                }
            }
            _ => {}
        }
    }

    /// Record the local alias of a tracked-library import
    fn visit_import(&mut self, import: &ast::StmtImport) {
        for alias in &import.names {
            if alias.name.as_str() == TRACKED_LIBRARY {
                let local = alias
                    .asname
                    .as_ref()
                    .map(|a| a.to_string())
                    .unwrap_or_else(|| alias.name.to_string());
                self.pandas_aliases.insert(local);
            }
        }
    }

    /// Dispatch an assignment to frame creation, frame methods, variable
    /// bindings, or column writes, then walk its children for reads
    fn visit_assign(&mut self, assign: &ast::StmtAssign) {
        if !self.try_create_frame(assign) && !self.try_frame_method(assign) {
            if let [target] = assign.targets.as_slice() {
                match target {
                    ast::Expr::Name(name) => {
                        self.bindings.insert(
                            name.id.to_string(),
                            Binding {
                                value: shallow_value(&assign.value),
                                region: self.index.region(assign.range),
                            },
                        );
                    }
                    ast::Expr::Subscript(sub) => self.column_write(sub, &assign.value),
                    _ => {}
                }
            }
        }

        for target in &assign.targets {
            self.visit_expr(target);
        }
        self.visit_expr(&assign.value);
    }

    /// Handle `x = alias.func(...)` for a tracked alias and a registered
    /// constructor. Registers a strict tracker when the handler resolves
    /// a column set.
    fn try_create_frame(&mut self, assign: &ast::StmtAssign) -> bool {
        let [ast::Expr::Name(target)] = assign.targets.as_slice() else {
            return false;
        };
        let ast::Expr::Call(call) = assign.value.as_ref() else {
            return false;
        };
        let ast::Expr::Attribute(attr) = call.func.as_ref() else {
            return false;
        };
        let ast::Expr::Name(module) = attr.value.as_ref() else {
            return false;
        };
        if !self.pandas_aliases.contains(module.id.as_str()) {
            return false;
        }
        let Some(handler) = self.constructors.get(attr.attr.as_str()) else {
            return false;
        };

        let args = self.eval_call_args(&call.args, &call.keywords);
        let Some(columns) = handler(&args) else {
            log::debug!(
                "constructor '{}' did not resolve a schema for '{}'",
                attr.attr.as_str(),
                target.id.as_str()
            );
            return false;
        };

        let mut tracker = FrameTracker::new_strict(target.id.to_string(), columns);
        tracker.defined_at = Some(self.index.region(assign.range));
        tracker.data_source = self.data_source_region(&call.args, &call.keywords);
        log::debug!(
            "tracking frame '{}' with {} columns",
            target.id.as_str(),
            tracker.columns.len()
        );
        self.frames.insert(target.id.to_string(), tracker);
        true
    }

    /// Handle `x = y.method(...)` where `y` is tracked and the method is
    /// registered. The returned frame's schema wins over the updated
    /// receiver when the method produces one.
    fn try_frame_method(&mut self, assign: &ast::StmtAssign) -> bool {
        let [ast::Expr::Name(target)] = assign.targets.as_slice() else {
            return false;
        };
        let ast::Expr::Call(call) = assign.value.as_ref() else {
            return false;
        };
        let ast::Expr::Attribute(attr) = call.func.as_ref() else {
            return false;
        };
        let ast::Expr::Name(receiver) = attr.value.as_ref() else {
            return false;
        };
        let Some(tracker) = self.frames.get(receiver.id.as_str()) else {
            return false;
        };
        let Some(handler) = self.methods.get(attr.attr.as_str()) else {
            return false;
        };

        let current: BTreeSet<String> = tracker.columns.keys().cloned().collect();
        let args = self.eval_call_args(&call.args, &call.keywords);
        let outcome = handler(&current, &args);
        let columns = outcome.returned.unwrap_or(outcome.updated);

        let mut new_tracker = FrameTracker::new_strict(target.id.to_string(), columns);
        new_tracker.defined_at = Some(self.index.region(assign.range));
        self.frames.insert(target.id.to_string(), new_tracker);
        true
    }

    /// Handle a bare `frame.method(...)` expression statement by applying
    /// the updated column set to the receiver in place
    fn try_inplace_method_call(&mut self, expr: &ast::Expr) {
        let ast::Expr::Call(call) = expr else {
            return;
        };
        let ast::Expr::Attribute(attr) = call.func.as_ref() else {
            return;
        };
        let ast::Expr::Name(receiver) = attr.value.as_ref() else {
            return;
        };
        let Some(current) = self
            .frames
            .get(receiver.id.as_str())
            .map(|tracker| tracker.columns.keys().cloned().collect::<BTreeSet<_>>())
        else {
            return;
        };
        let Some(handler) = self.methods.get(attr.attr.as_str()) else {
            return;
        };

        let args = self.eval_call_args(&call.args, &call.keywords);
        let outcome = handler(&current, &args);

        if let Some(tracker) = self.frames.get_mut(receiver.id.as_str()) {
            for column in outcome.updated.difference(&current) {
                tracker.try_add(column, &[]);
            }
        }
    }

    /// Apply a subscript write `tgt[cols] = rhs` to the target tracker
    fn column_write(&mut self, sub: &ast::ExprSubscript, rhs: &ast::Expr) {
        let Some(target_ref) = extract::subscript_ref(sub, self.index) else {
            return;
        };

        if !self.frames.contains_key(&target_ref.frame) {
            self.diagnostics.push(diagnostic::undeclared_frame(
                &target_ref.frame,
                target_ref.frame_region,
            ));
            return;
        }

        match extract::extract(rhs, self.index) {
            None => {
                // Unrecognized right-hand side: record the write without
                // dependencies
                if let Some(tracker) = self.frames.get_mut(&target_ref.frame) {
                    for column in &target_ref.columns {
                        tracker.try_add(column, &[]);
                    }
                }
                self.handled_subscripts.insert(target_ref.region);
            }
            Some(read_refs) => {
                for read_ref in &read_refs {
                    if !self.frames.contains_key(&read_ref.frame) {
                        self.diagnostics.push(diagnostic::undeclared_frame(
                            &read_ref.frame,
                            read_ref.frame_region,
                        ));
                        self.handled_subscripts.insert(target_ref.region);
                        self.handled_subscripts
                            .extend(read_refs.iter().map(|r| r.region));
                        return;
                    }
                }

                // Right-hand-side refs are always single-column
                let read_cols: Vec<String> = read_refs
                    .iter()
                    .map(|read_ref| read_ref.columns[0].clone())
                    .collect();

                if let Some(tracker) = self.frames.get_mut(&target_ref.frame) {
                    let missing = tracker.try_add(&target_ref.columns[0], &read_cols);
                    if missing.is_empty() {
                        for column in &target_ref.columns[1..] {
                            tracker.try_add(column, &read_cols);
                        }
                    } else {
                        let diag = diagnostic::invalid_assignment(
                            &target_ref.columns,
                            &missing,
                            target_ref.region,
                            tracker,
                        );
                        self.diagnostics.push(diag);
                    }
                }

                self.handled_subscripts.insert(target_ref.region);
                self.handled_subscripts
                    .extend(read_refs.iter().map(|r| r.region));
            }
        }
    }

    /// Validate a subscript read against its frame's tracker
    fn check_subscript_read(&mut self, sub: &ast::ExprSubscript) {
        let region = self.index.region(sub.range);
        if self.handled_subscripts.contains(&region) {
            return;
        }
        let Some(read_ref) = extract::subscript_ref(sub, self.index) else {
            return;
        };
        // An untracked name may be a dict or list subscript; stay silent
        let Some(tracker) = self.frames.get_mut(&read_ref.frame) else {
            return;
        };
        // Multi-column reads are not validated
        let [column] = read_ref.columns.as_slice() else {
            return;
        };
        if let Some(missing) = tracker.try_get(column) {
            let diag = diagnostic::missing_column_read(&missing, read_ref.region, tracker);
            self.diagnostics.push(diag);
        }
    }

    /// Recursive expression walk; validates every subscript read once
    fn visit_expr(&mut self, expr: &ast::Expr) {
        if let ast::Expr::Subscript(sub) = expr {
            self.check_subscript_read(sub);
        }

        match expr {
            ast::Expr::BoolOp(e) => {
                for value in &e.values {
                    self.visit_expr(value);
                }
            }
            ast::Expr::NamedExpr(e) => {
                self.visit_expr(&e.target);
                self.visit_expr(&e.value);
            }
            ast::Expr::BinOp(e) => {
                self.visit_expr(&e.left);
                self.visit_expr(&e.right);
            }
            ast::Expr::UnaryOp(e) => self.visit_expr(&e.operand),
            ast::Expr::Lambda(e) => self.visit_expr(&e.body),
            ast::Expr::IfExp(e) => {
                self.visit_expr(&e.test);
                self.visit_expr(&e.body);
                self.visit_expr(&e.orelse);
            }
            ast::Expr::Dict(e) => {
                for key in e.keys.iter().flatten() {
                    self.visit_expr(key);
                }
                for value in &e.values {
                    self.visit_expr(value);
                }
            }
            ast::Expr::Set(e) => {
                for elt in &e.elts {
                    self.visit_expr(elt);
                }
            }
            ast::Expr::ListComp(e) => {
                self.visit_expr(&e.elt);
                self.visit_comprehensions(&e.generators);
            }
            ast::Expr::SetComp(e) => {
                self.visit_expr(&e.elt);
                self.visit_comprehensions(&e.generators);
            }
            ast::Expr::DictComp(e) => {
                self.visit_expr(&e.key);
                self.visit_expr(&e.value);
                self.visit_comprehensions(&e.generators);
            }
            ast::Expr::GeneratorExp(e) => {
                self.visit_expr(&e.elt);
                self.visit_comprehensions(&e.generators);
            }
            ast::Expr::Await(e) => self.visit_expr(&e.value),
            ast::Expr::Yield(e) => {
                if let Some(value) = &e.value {
                    self.visit_expr(value);
                }
            }
            ast::Expr::YieldFrom(e) => self.visit_expr(&e.value),
            ast::Expr::Compare(e) => {
                self.visit_expr(&e.left);
                for comparator in &e.comparators {
                    self.visit_expr(comparator);
                }
            }
            ast::Expr::Call(e) => {
                self.visit_expr(&e.func);
                for arg in &e.args {
                    self.visit_expr(arg);
                }
                for keyword in &e.keywords {
                    self.visit_expr(&keyword.value);
                }
            }
            ast::Expr::FormattedValue(e) => self.visit_expr(&e.value),
            ast::Expr::JoinedStr(e) => {
                for value in &e.values {
                    self.visit_expr(value);
                }
            }
            ast::Expr::Attribute(e) => self.visit_expr(&e.value),
            ast::Expr::Subscript(e) => {
                self.visit_expr(&e.value);
                self.visit_expr(&e.slice);
            }
            ast::Expr::Starred(e) => self.visit_expr(&e.value),
            ast::Expr::List(e) => {
                for elt in &e.elts {
                    self.visit_expr(elt);
                }
            }
            ast::Expr::Tuple(e) => {
                for elt in &e.elts {
                    self.visit_expr(elt);
                }
            }
            ast::Expr::Slice(e) => {
                if let Some(lower) = &e.lower {
                    self.visit_expr(lower);
                }
                if let Some(upper) = &e.upper {
                    self.visit_expr(upper);
                }
                if let Some(step) = &e.step {
                    self.visit_expr(step);
                }
            }
            ast::Expr::Constant(_) | ast::Expr::Name(_) => {}
        }
    }

    fn visit_comprehensions(&mut self, generators: &[ast::Comprehension]) {
        for comp in generators {
            self.visit_expr(&comp.target);
            self.visit_expr(&comp.iter);
            for if_expr in &comp.ifs {
                self.visit_expr(if_expr);
            }
        }
    }

    /// Shallowly evaluate call arguments, resolving variables one level
    fn eval_call_args(&self, args: &[ast::Expr], keywords: &[ast::Keyword]) -> CallArgs {
        CallArgs {
            positional: args.iter().map(|arg| self.eval_arg(arg)).collect(),
            keyword: keywords
                .iter()
                .filter_map(|kw| {
                    kw.arg
                        .as_ref()
                        .map(|name| (name.to_string(), self.eval_arg(&kw.value)))
                })
                .collect(),
        }
    }

    /// Evaluate one argument. A bare variable resolves through bindings
    /// at most once; a tracked frame variable resolves to its schema; an
    /// unbound variable is `Unknown`.
    fn eval_arg(&self, expr: &ast::Expr) -> Value {
        if let ast::Expr::Name(name) = expr {
            if let Some(tracker) = self.frames.get(name.id.as_str()) {
                return Value::Frame(tracker.columns.keys().cloned().collect());
            }
            return self
                .bindings
                .get(name.id.as_str())
                .map(|binding| binding.value.clone())
                .unwrap_or(Value::Unknown);
        }
        shallow_value(expr)
    }

    /// Region of the binding behind a constructor's data argument, when
    /// that argument is a variable
    fn data_source_region(
        &self,
        args: &[ast::Expr],
        keywords: &[ast::Keyword],
    ) -> Option<SourceRegion> {
        let data_expr = args.first().or_else(|| {
            keywords
                .iter()
                .find(|kw| kw.arg.as_ref().is_some_and(|name| name.as_str() == "data"))
                .map(|kw| &kw.value)
        })?;
        let ast::Expr::Name(name) = data_expr else {
            return None;
        };
        self.bindings
            .get(name.id.as_str())
            .map(|binding| binding.region)
    }
}

#[cfg(test)]
#[path = "checker_test.rs"]
mod tests;
