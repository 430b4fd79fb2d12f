use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use chrono::{DateTime, Local, Utc};
use crossterm::event::{self, Event, KeyEvent};
use engine::{
    Engine, Expense, Ingredient, Money, Sale, export, render_report, summary,
    summary::TextSearch,
};
use uuid::Uuid;

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    print::{self, DocumentOpener},
    sale_entry,
    ui,
};

const TOAST_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Inventory,
    Expenses,
    Sales,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Inventory => "Inventory",
            Self::Expenses => "Expenses",
            Self::Sales => "Sales",
        }
    }
}

/// Whether a record section shows its list or an open form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenMode {
    List,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientField {
    Name,
    Category,
    Quantity,
    Unit,
    UnitPrice,
    MinStock,
}

#[derive(Debug)]
pub struct IngredientForm {
    pub editing: Option<Uuid>,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub unit: String,
    pub unit_price: String,
    pub min_stock: String,
    pub focus: IngredientField,
    pub error: Option<String>,
}

impl IngredientForm {
    pub fn blank() -> Self {
        Self {
            editing: None,
            name: String::new(),
            category: String::new(),
            quantity: String::new(),
            unit: String::new(),
            unit_price: String::new(),
            min_stock: String::new(),
            focus: IngredientField::Name,
            error: None,
        }
    }

    pub fn from_record(record: &Ingredient) -> Self {
        Self {
            editing: Some(record.id),
            name: record.name.clone(),
            category: record.category.clone(),
            quantity: format!("{}", record.quantity),
            unit: record.unit.clone(),
            unit_price: record.unit_price.to_decimal(),
            min_stock: format!("{}", record.min_stock),
            focus: IngredientField::Name,
            error: None,
        }
    }

    pub fn advance_focus(&mut self) {
        self.focus = match self.focus {
            IngredientField::Name => IngredientField::Category,
            IngredientField::Category => IngredientField::Quantity,
            IngredientField::Quantity => IngredientField::Unit,
            IngredientField::Unit => IngredientField::UnitPrice,
            IngredientField::UnitPrice => IngredientField::MinStock,
            IngredientField::MinStock => IngredientField::Name,
        };
    }

    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            IngredientField::Name => &mut self.name,
            IngredientField::Category => &mut self.category,
            IngredientField::Quantity => &mut self.quantity,
            IngredientField::Unit => &mut self.unit,
            IngredientField::UnitPrice => &mut self.unit_price,
            IngredientField::MinStock => &mut self.min_stock,
        }
    }

    /// Validates the typed fields and builds the ingredient, keeping the
    /// original id when editing.
    pub fn build(&self, now: DateTime<Utc>) -> std::result::Result<Ingredient, String> {
        if self.name.trim().is_empty() {
            return Err("name is required".to_string());
        }
        let quantity: f64 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| "quantity must be a number".to_string())?;
        if quantity < 0.0 {
            return Err("quantity must not be negative".to_string());
        }
        let unit_price: Money = self
            .unit_price
            .trim()
            .parse()
            .map_err(|_| "unit price must be a number".to_string())?;
        let min_stock: f64 = self
            .min_stock
            .trim()
            .parse()
            .map_err(|_| "min stock must be a number".to_string())?;
        if min_stock < 0.0 {
            return Err("min stock must not be negative".to_string());
        }

        let mut record = Ingredient::new(
            self.name.trim(),
            self.category.trim(),
            quantity,
            self.unit.trim(),
            unit_price,
            min_stock,
            now,
        );
        if let Some(id) = self.editing {
            record.id = id;
        }
        Ok(record)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseField {
    Description,
    Category,
    Amount,
}

#[derive(Debug)]
pub struct ExpenseForm {
    pub editing: Option<Uuid>,
    pub description: String,
    pub category: String,
    pub amount: String,
    pub date: DateTime<Utc>,
    pub focus: ExpenseField,
    pub error: Option<String>,
}

impl ExpenseForm {
    pub fn blank(now: DateTime<Utc>) -> Self {
        Self {
            editing: None,
            description: String::new(),
            category: String::new(),
            amount: String::new(),
            date: now,
            focus: ExpenseField::Description,
            error: None,
        }
    }

    pub fn from_record(record: &Expense) -> Self {
        Self {
            editing: Some(record.id),
            description: record.description.clone(),
            category: record.category.clone(),
            amount: record.amount.to_decimal(),
            date: record.date,
            focus: ExpenseField::Description,
            error: None,
        }
    }

    pub fn advance_focus(&mut self) {
        self.focus = match self.focus {
            ExpenseField::Description => ExpenseField::Category,
            ExpenseField::Category => ExpenseField::Amount,
            ExpenseField::Amount => ExpenseField::Description,
        };
    }

    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            ExpenseField::Description => &mut self.description,
            ExpenseField::Category => &mut self.category,
            ExpenseField::Amount => &mut self.amount,
        }
    }

    pub fn build(&self) -> std::result::Result<Expense, String> {
        if self.description.trim().is_empty() {
            return Err("description is required".to_string());
        }
        let amount: Money = self
            .amount
            .trim()
            .parse()
            .map_err(|_| "amount must be a number".to_string())?;
        if amount.is_negative() {
            return Err("amount must not be negative".to_string());
        }

        let mut record = Expense::new(
            self.description.trim(),
            self.category.trim(),
            amount,
            self.date,
        );
        if let Some(id) = self.editing {
            record.id = id;
        }
        Ok(record)
    }
}

/// Sale entry is a single free-text field; see `sale_entry::parse_items`
/// for the accepted shape.
#[derive(Debug)]
pub struct SaleForm {
    pub editing: Option<Uuid>,
    pub items: String,
    pub date: DateTime<Utc>,
    pub error: Option<String>,
}

impl SaleForm {
    pub fn blank(now: DateTime<Utc>) -> Self {
        Self {
            editing: None,
            items: String::new(),
            date: now,
            error: None,
        }
    }

    pub fn from_record(record: &Sale) -> Self {
        let items = record
            .items
            .iter()
            .map(|item| {
                format!(
                    "{} x {} @ {}",
                    item.quantity,
                    item.name,
                    item.unit_price.to_decimal()
                )
            })
            .collect::<Vec<_>>()
            .join("; ");
        Self {
            editing: Some(record.id),
            items,
            date: record.date,
            error: None,
        }
    }

    pub fn build(&self) -> std::result::Result<Sale, String> {
        let items = sale_entry::parse_items(&self.items)?;
        let mut record = Sale::new(items, self.date).map_err(|err| err.to_string())?;
        if let Some(id) = self.editing {
            record.id = id;
        }
        Ok(record)
    }
}

#[derive(Debug)]
pub struct InventoryState {
    pub selected: usize,
    pub mode: ScreenMode,
    pub search_active: bool,
    pub search_query: String,
    pub form: IngredientForm,
}

impl Default for InventoryState {
    fn default() -> Self {
        Self {
            selected: 0,
            mode: ScreenMode::List,
            search_active: false,
            search_query: String::new(),
            form: IngredientForm::blank(),
        }
    }
}

#[derive(Debug)]
pub struct ExpensesState {
    pub selected: usize,
    pub mode: ScreenMode,
    pub search_active: bool,
    pub search_query: String,
    pub form: ExpenseForm,
}

impl Default for ExpensesState {
    fn default() -> Self {
        Self {
            selected: 0,
            mode: ScreenMode::List,
            search_active: false,
            search_query: String::new(),
            form: ExpenseForm::blank(Utc::now()),
        }
    }
}

#[derive(Debug)]
pub struct SalesState {
    pub selected: usize,
    pub mode: ScreenMode,
    pub search_active: bool,
    pub search_query: String,
    pub form: SaleForm,
}

impl Default for SalesState {
    fn default() -> Self {
        Self {
            selected: 0,
            mode: ScreenMode::List,
            search_active: false,
            search_query: String::new(),
            form: SaleForm::blank(Utc::now()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    pub expires_at: Instant,
}

impl ToastState {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            expires_at: Instant::now() + TOAST_LIFETIME,
        }
    }
}

pub struct AppState {
    pub engine: Engine,
    pub restaurant: String,
    pub section: Section,
    pub inventory: InventoryState,
    pub expenses: ExpensesState,
    pub sales: SalesState,
    pub help_active: bool,
    pub toast: Option<ToastState>,
}

impl AppState {
    /// Mode of the active section. The dashboard has no form.
    pub fn screen_mode(&self) -> ScreenMode {
        match self.section {
            Section::Dashboard => ScreenMode::List,
            Section::Inventory => self.inventory.mode,
            Section::Expenses => self.expenses.mode,
            Section::Sales => self.sales.mode,
        }
    }

    fn search_active(&self) -> bool {
        match self.section {
            Section::Dashboard => false,
            Section::Inventory => self.inventory.search_active,
            Section::Expenses => self.expenses.search_active,
            Section::Sales => self.sales.search_active,
        }
    }
}

/// Indices of the records matching the live search query, in list order.
/// Selection always refers to a position in this slice, not the full list.
pub fn visible_indices<T: TextSearch>(records: &[T], query: &str) -> Vec<usize> {
    summary::filter_indices(records, query)
}

pub struct App {
    config: AppConfig,
    opener: Box<dyn DocumentOpener>,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, opener: Box<dyn DocumentOpener>) -> Self {
        let state = AppState {
            engine: Engine::with_sample_data(),
            restaurant: config.restaurant.clone(),
            section: Section::Dashboard,
            inventory: InventoryState::default(),
            expenses: ExpensesState::default(),
            sales: SalesState::default(),
            help_active: false,
            toast: None,
        };

        Self {
            config,
            opener,
            state,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            self.expire_toast();
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key)?,
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn expire_toast(&mut self) {
        let expired = self
            .state
            .toast
            .as_ref()
            .is_some_and(|toast| Instant::now() >= toast.expires_at);
        if expired {
            self.state.toast = None;
        }
    }

    fn toast(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.state.toast = Some(ToastState::new(message, level));
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        use crate::ui::keymap::AppAction;

        match crate::ui::keymap::map_key(key) {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::ToggleSearch => {
                self.toggle_search();
            }
            AppAction::Cancel => {
                self.cancel();
            }
            AppAction::NextField => {
                if self.state.screen_mode() == ScreenMode::Form {
                    match self.state.section {
                        Section::Inventory => self.state.inventory.form.advance_focus(),
                        Section::Expenses => self.state.expenses.form.advance_focus(),
                        Section::Dashboard | Section::Sales => {}
                    }
                }
            }
            AppAction::Submit => {
                self.submit()?;
            }
            AppAction::Backspace => {
                self.backspace();
            }
            AppAction::Up => {
                self.move_selection(-1);
            }
            AppAction::Down => {
                self.move_selection(1);
            }
            AppAction::Input(ch) => {
                self.input(ch)?;
            }
            AppAction::None => {}
        }

        Ok(())
    }

    fn toggle_search(&mut self) {
        if self.state.screen_mode() == ScreenMode::Form {
            return;
        }
        match self.state.section {
            Section::Dashboard => {}
            Section::Inventory => {
                self.state.inventory.search_active = !self.state.inventory.search_active;
            }
            Section::Expenses => {
                self.state.expenses.search_active = !self.state.expenses.search_active;
            }
            Section::Sales => {
                self.state.sales.search_active = !self.state.sales.search_active;
            }
        }
    }

    fn cancel(&mut self) {
        if self.state.help_active {
            self.state.help_active = false;
            return;
        }

        match self.state.section {
            Section::Dashboard => {}
            Section::Inventory => {
                let inv = &mut self.state.inventory;
                if inv.mode == ScreenMode::Form {
                    inv.mode = ScreenMode::List;
                    inv.form = IngredientForm::blank();
                } else if inv.search_active {
                    inv.search_active = false;
                } else {
                    inv.search_query.clear();
                }
            }
            Section::Expenses => {
                let exp = &mut self.state.expenses;
                if exp.mode == ScreenMode::Form {
                    exp.mode = ScreenMode::List;
                    exp.form = ExpenseForm::blank(Utc::now());
                } else if exp.search_active {
                    exp.search_active = false;
                } else {
                    exp.search_query.clear();
                }
            }
            Section::Sales => {
                let sales = &mut self.state.sales;
                if sales.mode == ScreenMode::Form {
                    sales.mode = ScreenMode::List;
                    sales.form = SaleForm::blank(Utc::now());
                } else if sales.search_active {
                    sales.search_active = false;
                } else {
                    sales.search_query.clear();
                }
            }
        }
    }

    fn submit(&mut self) -> Result<()> {
        if self.state.search_active() {
            // Enter commits the query and returns focus to the list.
            self.toggle_search();
            return Ok(());
        }

        match (self.state.section, self.state.screen_mode()) {
            (Section::Inventory, ScreenMode::Form) => self.save_ingredient(),
            (Section::Expenses, ScreenMode::Form) => self.save_expense(),
            (Section::Sales, ScreenMode::Form) => self.save_sale(),
            (Section::Inventory, ScreenMode::List) => {
                if let Some(record) = self.selected_ingredient().cloned() {
                    self.state.inventory.form = IngredientForm::from_record(&record);
                    self.state.inventory.mode = ScreenMode::Form;
                }
                Ok(())
            }
            (Section::Expenses, ScreenMode::List) => {
                if let Some(record) = self.selected_expense().cloned() {
                    self.state.expenses.form = ExpenseForm::from_record(&record);
                    self.state.expenses.mode = ScreenMode::Form;
                }
                Ok(())
            }
            (Section::Sales, ScreenMode::List) => {
                if let Some(record) = self.selected_sale().cloned() {
                    self.state.sales.form = SaleForm::from_record(&record);
                    self.state.sales.mode = ScreenMode::Form;
                }
                Ok(())
            }
            (Section::Dashboard, _) => Ok(()),
        }
    }

    fn backspace(&mut self) {
        if self.state.search_active() {
            match self.state.section {
                Section::Dashboard => {}
                Section::Inventory => {
                    self.state.inventory.search_query.pop();
                }
                Section::Expenses => {
                    self.state.expenses.search_query.pop();
                }
                Section::Sales => {
                    self.state.sales.search_query.pop();
                }
            }
            return;
        }

        if self.state.screen_mode() == ScreenMode::Form {
            match self.state.section {
                Section::Inventory => {
                    self.state.inventory.form.focused_mut().pop();
                }
                Section::Expenses => {
                    self.state.expenses.form.focused_mut().pop();
                }
                Section::Sales => {
                    self.state.sales.form.items.pop();
                }
                Section::Dashboard => {}
            }
        }
    }

    fn move_selection(&mut self, delta: i64) {
        if self.state.screen_mode() != ScreenMode::List {
            return;
        }
        let visible_len = match self.state.section {
            Section::Dashboard => return,
            Section::Inventory => visible_indices(
                self.state.engine.ingredients(),
                &self.state.inventory.search_query,
            )
            .len(),
            Section::Expenses => visible_indices(
                self.state.engine.expenses(),
                &self.state.expenses.search_query,
            )
            .len(),
            Section::Sales => {
                visible_indices(self.state.engine.sales(), &self.state.sales.search_query).len()
            }
        };
        if visible_len == 0 {
            return;
        }

        let selected = match self.state.section {
            Section::Dashboard => return,
            Section::Inventory => &mut self.state.inventory.selected,
            Section::Expenses => &mut self.state.expenses.selected,
            Section::Sales => &mut self.state.sales.selected,
        };
        let current = (*selected).min(visible_len - 1) as i64;
        *selected = (current + delta).clamp(0, visible_len as i64 - 1) as usize;
    }

    fn input(&mut self, ch: char) -> Result<()> {
        if self.state.help_active {
            if ch == '?' {
                self.state.help_active = false;
            }
            return Ok(());
        }

        if self.state.search_active() {
            match self.state.section {
                Section::Dashboard => {}
                Section::Inventory => self.state.inventory.search_query.push(ch),
                Section::Expenses => self.state.expenses.search_query.push(ch),
                Section::Sales => self.state.sales.search_query.push(ch),
            }
            return Ok(());
        }

        if self.state.screen_mode() == ScreenMode::Form {
            match self.state.section {
                Section::Inventory => self.state.inventory.form.focused_mut().push(ch),
                Section::Expenses => self.state.expenses.form.focused_mut().push(ch),
                Section::Sales => self.state.sales.form.items.push(ch),
                Section::Dashboard => {}
            }
            return Ok(());
        }

        match ch {
            'q' => self.should_quit = true,
            '?' => self.state.help_active = true,
            'h' => self.state.section = Section::Dashboard,
            'i' => self.state.section = Section::Inventory,
            'e' => self.state.section = Section::Expenses,
            's' => self.state.section = Section::Sales,
            'c' => self.open_create_form(),
            'd' => self.delete_selected()?,
            'p' if self.state.section == Section::Dashboard => self.print_report(),
            'x' if self.state.section == Section::Dashboard => self.export_csvs(),
            _ => {}
        }

        Ok(())
    }

    fn open_create_form(&mut self) {
        match self.state.section {
            Section::Dashboard => {}
            Section::Inventory => {
                self.state.inventory.form = IngredientForm::blank();
                self.state.inventory.mode = ScreenMode::Form;
            }
            Section::Expenses => {
                self.state.expenses.form = ExpenseForm::blank(Utc::now());
                self.state.expenses.mode = ScreenMode::Form;
            }
            Section::Sales => {
                self.state.sales.form = SaleForm::blank(Utc::now());
                self.state.sales.mode = ScreenMode::Form;
            }
        }
    }

    fn selected_ingredient(&self) -> Option<&Ingredient> {
        let visible = visible_indices(
            self.state.engine.ingredients(),
            &self.state.inventory.search_query,
        );
        let idx = *visible.get(self.state.inventory.selected.min(visible.len().saturating_sub(1)))?;
        self.state.engine.ingredients().get(idx)
    }

    fn selected_expense(&self) -> Option<&Expense> {
        let visible = visible_indices(
            self.state.engine.expenses(),
            &self.state.expenses.search_query,
        );
        let idx = *visible.get(self.state.expenses.selected.min(visible.len().saturating_sub(1)))?;
        self.state.engine.expenses().get(idx)
    }

    fn selected_sale(&self) -> Option<&Sale> {
        let visible = visible_indices(self.state.engine.sales(), &self.state.sales.search_query);
        let idx = *visible.get(self.state.sales.selected.min(visible.len().saturating_sub(1)))?;
        self.state.engine.sales().get(idx)
    }

    fn delete_selected(&mut self) -> Result<()> {
        match self.state.section {
            Section::Dashboard => return Ok(()),
            Section::Inventory => {
                if let Some(id) = self.selected_ingredient().map(|record| record.id) {
                    self.state.engine.remove_ingredient(id)?;
                    self.move_selection(0);
                    self.toast("Ingredient deleted", ToastLevel::Info);
                }
            }
            Section::Expenses => {
                if let Some(id) = self.selected_expense().map(|record| record.id) {
                    self.state.engine.remove_expense(id)?;
                    self.move_selection(0);
                    self.toast("Expense deleted", ToastLevel::Info);
                }
            }
            Section::Sales => {
                if let Some(id) = self.selected_sale().map(|record| record.id) {
                    self.state.engine.remove_sale(id)?;
                    self.move_selection(0);
                    self.toast("Sale deleted", ToastLevel::Info);
                }
            }
        }
        Ok(())
    }

    fn save_ingredient(&mut self) -> Result<()> {
        let record = match self.state.inventory.form.build(Utc::now()) {
            Ok(record) => record,
            Err(message) => {
                self.state.inventory.form.error = Some(message);
                return Ok(());
            }
        };

        let editing = self.state.inventory.form.editing.is_some();
        let result = if editing {
            self.state.engine.update_ingredient(record)
        } else {
            self.state.engine.add_ingredient(record)
        };
        match result {
            Ok(()) => {
                self.state.inventory.form = IngredientForm::blank();
                self.state.inventory.mode = ScreenMode::List;
                self.toast(
                    if editing {
                        "Ingredient updated"
                    } else {
                        "Ingredient added"
                    },
                    ToastLevel::Success,
                );
            }
            Err(err) => {
                self.state.inventory.form.error = Some(err.to_string());
            }
        }
        Ok(())
    }

    fn save_expense(&mut self) -> Result<()> {
        let record = match self.state.expenses.form.build() {
            Ok(record) => record,
            Err(message) => {
                self.state.expenses.form.error = Some(message);
                return Ok(());
            }
        };

        let editing = self.state.expenses.form.editing.is_some();
        let result = if editing {
            self.state.engine.update_expense(record)
        } else {
            self.state.engine.add_expense(record)
        };
        match result {
            Ok(()) => {
                self.state.expenses.form = ExpenseForm::blank(Utc::now());
                self.state.expenses.mode = ScreenMode::List;
                self.toast(
                    if editing {
                        "Expense updated"
                    } else {
                        "Expense added"
                    },
                    ToastLevel::Success,
                );
            }
            Err(err) => {
                self.state.expenses.form.error = Some(err.to_string());
            }
        }
        Ok(())
    }

    fn save_sale(&mut self) -> Result<()> {
        let record = match self.state.sales.form.build() {
            Ok(record) => record,
            Err(message) => {
                self.state.sales.form.error = Some(message);
                return Ok(());
            }
        };

        let editing = self.state.sales.form.editing.is_some();
        let result = if editing {
            self.state.engine.update_sale(record)
        } else {
            self.state.engine.add_sale(record)
        };
        match result {
            Ok(()) => {
                self.state.sales.form = SaleForm::blank(Utc::now());
                self.state.sales.mode = ScreenMode::List;
                self.toast(
                    if editing { "Sale updated" } else { "Sale recorded" },
                    ToastLevel::Success,
                );
            }
            Err(err) => {
                self.state.sales.form.error = Some(err.to_string());
            }
        }
        Ok(())
    }

    fn print_report(&mut self) {
        let html = render_report(
            &self.state.engine.snapshot(),
            Utc::now(),
            &self.state.restaurant,
        );
        if print::hand_off(self.opener.as_ref(), &html) {
            self.toast("Report sent to viewer", ToastLevel::Success);
        } else {
            self.toast("Report viewer unavailable", ToastLevel::Error);
        }
    }

    fn export_csvs(&mut self) {
        let dir = PathBuf::from(&self.config.export_dir);
        match write_csv_exports(&self.state.engine, &dir, Local::now().format("%Y%m%d")) {
            Ok(()) => {
                tracing::info!("CSV export written to {}", dir.display());
                self.toast(
                    format!("CSV export written to {}", dir.display()),
                    ToastLevel::Success,
                );
            }
            Err(err) => {
                tracing::warn!("CSV export failed: {err}");
                self.toast(format!("CSV export failed: {err}"), ToastLevel::Error);
            }
        }
    }
}

/// Writes the three data sets as date-stamped CSV files under `dir`.
fn write_csv_exports(
    engine: &Engine,
    dir: &Path,
    stamp: impl std::fmt::Display,
) -> Result<()> {
    fs::create_dir_all(dir)?;

    let inventory = fs::File::create(dir.join(format!("inventory_{stamp}.csv")))?;
    export::write_inventory_csv(inventory, engine.ingredients())?;

    let expenses = fs::File::create(dir.join(format!("expenses_{stamp}.csv")))?;
    export::write_expenses_csv(expenses, engine.expenses())?;

    let sales = fs::File::create(dir.join(format!("sales_{stamp}.csv")))?;
    export::write_sales_csv(sales, engine.sales())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use engine::SaleItem;

    use super::*;

    #[test]
    fn visible_indices_filters_case_insensitively() {
        let now = Utc::now();
        let records = vec![
            Ingredient::new("Tomatoes", "Vegetables", 5.0, "kg", Money::new(5000), 2.0, now),
            Ingredient::new("Chicken", "Meat", 3.0, "kg", Money::new(18000), 1.0, now),
        ];
        assert_eq!(visible_indices(&records, ""), vec![0, 1]);
        assert_eq!(visible_indices(&records, "toma"), vec![0]);
        assert_eq!(visible_indices(&records, "MEAT"), vec![1]);
        assert!(visible_indices(&records, "rice").is_empty());
    }

    #[test]
    fn ingredient_form_rejects_bad_numbers() {
        let mut form = IngredientForm::blank();
        form.name = "Rice".to_string();
        form.quantity = "lots".to_string();
        form.unit_price = "52".to_string();
        form.min_stock = "10".to_string();
        assert!(form.build(Utc::now()).is_err());

        form.quantity = "25".to_string();
        let record = form.build(Utc::now()).expect("valid form");
        assert_eq!(record.name, "Rice");
        assert_eq!(record.unit_price, Money::new(5200));
    }

    #[test]
    fn ingredient_form_keeps_id_when_editing() {
        let now = Utc::now();
        let original = Ingredient::new("Rice", "Grains", 25.0, "kg", Money::new(5200), 10.0, now);
        let form = IngredientForm::from_record(&original);
        let rebuilt = form.build(now).expect("valid form");
        assert_eq!(rebuilt.id, original.id);
        assert_eq!(rebuilt.quantity, 25.0);
    }

    #[test]
    fn expense_form_rejects_negative_amount() {
        let mut form = ExpenseForm::blank(Utc::now());
        form.description = "Refund".to_string();
        form.amount = "-50".to_string();
        assert!(form.build().is_err());
    }

    #[test]
    fn sale_form_round_trips_line_items() {
        let date = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let original = Sale::new(
            vec![
                SaleItem::new("Adobo", 2, Money::new(18000)),
                SaleItem::new("Rice", 3, Money::new(2500)),
            ],
            date,
        )
        .expect("valid sale");

        let form = SaleForm::from_record(&original);
        let rebuilt = form.build().expect("parseable form text");
        assert_eq!(rebuilt.id, original.id);
        assert_eq!(rebuilt.total, original.total);
        assert_eq!(rebuilt.items.len(), 2);
    }

    #[test]
    fn sale_form_rejects_empty_entry() {
        let form = SaleForm::blank(Utc::now());
        assert!(form.build().is_err());
    }
}
