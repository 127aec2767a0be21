// registry.rs - Load-once table registry.
//
// Owns the decoded tables. Each table is loaded lazily from a `TableSource`,
// stays immutable while loaded, and can be unloaded or reloaded by mask.

use smallvec::SmallVec;

use crate::decoder::read_source;
use crate::error::UcError;
use crate::source::TableSource;
use crate::tables::{
    CaseMapper, CaseTable, CombiningClassTable, DecompositionTable, NumericTable, PropertyTable,
    Table, Tables,
};

/// Outcome of a load or reload call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    errors: SmallVec<[(Tables, UcError); 2]>,
}

impl LoadReport {
    /// True if every selected table is loaded.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Mask of the tables that failed to load.
    pub fn failed(&self) -> Tables {
        self.errors
            .iter()
            .fold(Tables::empty(), |acc, (table, _)| acc | *table)
    }

    /// The error for a single failed table.
    pub fn error(&self, table: Tables) -> Option<&UcError> {
        self.errors
            .iter()
            .find(|(t, _)| *t == table)
            .map(|(_, err)| err)
    }

    pub fn errors(&self) -> impl Iterator<Item = &(Tables, UcError)> {
        self.errors.iter()
    }

    /// Convert into a `Result` holding the first failure.
    pub fn into_result(self) -> Result<(), UcError> {
        match self.errors.into_iter().next() {
            Some((_, err)) => Err(err),
            None => Ok(()),
        }
    }
}

/// Registry of Unicode data tables.
///
/// Queries go through the per-table accessors, which fail with
/// [`UcError::Unpopulated`] when the table has not been loaded.
///
/// # Examples
///
/// ```no_run
/// use ucdata::prelude::*;
///
/// let mut ucd = UcData::new();
/// let report = ucd.load(&SearchPath::from_env(), Tables::CTYPE | Tables::CASE);
/// assert!(report.is_ok());
///
/// assert!(ucd.ctype()?.is_alpha(0x1d5));
/// assert_eq!(ucd.case_mapper()?.to_lower(0x41), 0x61);
/// # Ok::<(), UcError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct UcData {
    ctype: Option<PropertyTable>,
    case: Option<CaseTable>,
    decomp: Option<DecompositionTable>,
    cmbcl: Option<CombiningClassTable>,
    num: Option<NumericTable>,
}

fn load_slot<T, S>(slot: &mut Option<T>, source: &S, force: bool) -> Result<(), UcError>
where
    T: Table,
    S: TableSource + ?Sized,
{
    let name = T::KIND.file_name().unwrap_or_default();
    if slot.is_some() && !force {
        log::trace!("{} already loaded", name);
        return Ok(());
    }
    let data = read_source(source.open(name)?)?;
    let table = T::from_bytes(&data)?;
    log::debug!("loaded {} ({} bytes)", name, data.len());
    *slot = Some(table);
    Ok(())
}

impl UcData {
    /// An empty registry with no tables loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the selected tables that are not loaded yet. Tables already
    /// present are left untouched.
    pub fn load<S: TableSource + ?Sized>(&mut self, source: &S, tables: Tables) -> LoadReport {
        self.load_tables(source, tables, false)
    }

    /// Decode the selected tables again even if they are loaded. A table
    /// whose reload fails keeps its previous contents.
    pub fn reload<S: TableSource + ?Sized>(&mut self, source: &S, tables: Tables) -> LoadReport {
        self.load_tables(source, tables, true)
    }

    fn load_tables<S: TableSource + ?Sized>(
        &mut self,
        source: &S,
        tables: Tables,
        force: bool,
    ) -> LoadReport {
        let mut report = LoadReport::default();
        for table in Tables::EACH {
            if !tables.contains(table) {
                continue;
            }
            let result = match table {
                t if t == Tables::CTYPE => load_slot(&mut self.ctype, source, force),
                t if t == Tables::CASE => load_slot(&mut self.case, source, force),
                t if t == Tables::DECOMP => load_slot(&mut self.decomp, source, force),
                t if t == Tables::CMBCL => load_slot(&mut self.cmbcl, source, force),
                _ => load_slot(&mut self.num, source, force),
            };
            if let Err(err) = result {
                log::warn!(
                    "failed to load {}: {}",
                    table.file_name().unwrap_or_default(),
                    err
                );
                report.errors.push((table, err));
            }
        }
        report
    }

    /// Drop the selected tables. Unloading a table that is not loaded is a
    /// no-op.
    pub fn unload(&mut self, tables: Tables) {
        if tables.contains(Tables::CTYPE) {
            self.ctype = None;
        }
        if tables.contains(Tables::CASE) {
            self.case = None;
        }
        if tables.contains(Tables::DECOMP) {
            self.decomp = None;
        }
        if tables.contains(Tables::CMBCL) {
            self.cmbcl = None;
        }
        if tables.contains(Tables::NUM) {
            self.num = None;
        }
        log::trace!("unloaded {:?}", tables);
    }

    /// Mask of the tables currently loaded.
    pub fn loaded(&self) -> Tables {
        let mut mask = Tables::empty();
        mask.set(Tables::CTYPE, self.ctype.is_some());
        mask.set(Tables::CASE, self.case.is_some());
        mask.set(Tables::DECOMP, self.decomp.is_some());
        mask.set(Tables::CMBCL, self.cmbcl.is_some());
        mask.set(Tables::NUM, self.num.is_some());
        mask
    }

    pub fn is_loaded(&self, tables: Tables) -> bool {
        self.loaded().contains(tables)
    }

    // === Accessors ===

    pub fn ctype(&self) -> Result<&PropertyTable, UcError> {
        self.ctype.as_ref().ok_or(UcError::Unpopulated(Tables::CTYPE))
    }

    pub fn case(&self) -> Result<&CaseTable, UcError> {
        self.case.as_ref().ok_or(UcError::Unpopulated(Tables::CASE))
    }

    /// Case conversion, which needs both the ctype and case tables.
    pub fn case_mapper(&self) -> Result<CaseMapper<'_>, UcError> {
        Ok(CaseMapper::new(self.ctype()?, self.case()?))
    }

    pub fn decomp(&self) -> Result<&DecompositionTable, UcError> {
        self.decomp.as_ref().ok_or(UcError::Unpopulated(Tables::DECOMP))
    }

    pub fn cmbcl(&self) -> Result<&CombiningClassTable, UcError> {
        self.cmbcl.as_ref().ok_or(UcError::Unpopulated(Tables::CMBCL))
    }

    pub fn num(&self) -> Result<&NumericTable, UcError> {
        self.num.as_ref().ok_or(UcError::Unpopulated(Tables::NUM))
    }
}
