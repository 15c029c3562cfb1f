//! High-level circuit builder API.

use std::fmt;

use num_complex::Complex64;
use qsv_engine::{EngineConfig, StatevectorEngine, validate_qubits};
use qsv_gates::{self as gates, GateMatrix, GateSpec, num_qubits_of};
use rand::Rng;
use tracing::{debug, instrument};

use crate::error::{CircuitError, CircuitResult};

/// One recorded gate application.
#[derive(Debug, Clone)]
pub struct Instruction {
    /// Display name.
    pub name: String,
    /// Operator to apply.
    pub matrix: GateMatrix,
    /// Target qubits; the first is the operator's most-significant local bit.
    pub qubits: Vec<usize>,
}

/// A quantum circuit bound to its own statevector engine.
///
/// Gates are recorded, not applied. [`execute`](Self::execute) resets the
/// engine and replays the whole program, so executing twice yields the
/// same state.
pub struct QuantumCircuit {
    num_qubits: usize,
    engine: StatevectorEngine,
    instructions: Vec<Instruction>,
    measurements: Vec<(usize, u8)>,
    /// Instructions already applied to the engine state, `None` until the
    /// first run.
    applied: Option<usize>,
}

impl QuantumCircuit {
    /// Create an empty circuit on `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> CircuitResult<Self> {
        Self::with_config(num_qubits, EngineConfig::default())
    }

    /// Create an empty circuit with an explicit engine configuration.
    pub fn with_config(num_qubits: usize, config: EngineConfig) -> CircuitResult<Self> {
        let engine = StatevectorEngine::with_config(num_qubits, config)?;
        Ok(Self {
            num_qubits,
            engine,
            instructions: vec![],
            measurements: vec![],
            applied: None,
        })
    }

    // =========================================================================
    // Recording
    // =========================================================================

    /// Record `matrix` on `qubits` under `name`.
    ///
    /// Shape and indices are checked here so that replay cannot fail.
    pub fn apply_matrix(
        &mut self,
        name: impl Into<String>,
        matrix: GateMatrix,
        qubits: &[usize],
    ) -> CircuitResult<&mut Self> {
        let name = name.into();
        let expected = num_qubits_of(&matrix).ok_or_else(|| {
            let (rows, cols) = matrix.dim();
            gates::GateError::InvalidMatrix(format!("{rows}x{cols} operator for '{name}'"))
        })?;
        if expected != qubits.len() {
            return Err(CircuitError::QubitCountMismatch {
                gate_name: name,
                expected,
                got: qubits.len(),
            });
        }
        if let Err(source) = validate_qubits(qubits, self.num_qubits) {
            return Err(CircuitError::InvalidQubits {
                gate_name: name,
                source,
            });
        }

        self.instructions.push(Instruction {
            name,
            matrix,
            qubits: qubits.to_vec(),
        });
        Ok(self)
    }

    /// Resolve `gate` with `angle` and record it under `name`.
    ///
    /// Parametric gates are labelled with their angle, e.g. `rx(1.5708)`.
    pub fn apply(
        &mut self,
        name: &str,
        gate: &GateSpec,
        qubits: &[usize],
        angle: Option<f64>,
    ) -> CircuitResult<&mut Self> {
        let matrix = gate.resolve(angle)?;
        let label = match angle {
            Some(theta) => format!("{name}({theta:.4})"),
            None => name.to_string(),
        };
        self.apply_matrix(label, matrix, qubits)
    }

    /// Record `gate` controlled on every qubit in `controls`.
    pub fn controlled(
        &mut self,
        gate: &GateMatrix,
        controls: &[usize],
        targets: &[usize],
    ) -> CircuitResult<&mut Self> {
        let matrix = gates::controlled(gate, controls.len())?;
        let qubits: Vec<usize> = controls.iter().chain(targets).copied().collect();
        self.apply_matrix(format!("c{}", controls.len()), matrix, &qubits)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("h", gates::h(), &[qubit])
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("x", gates::x(), &[qubit])
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("y", gates::y(), &[qubit])
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("z", gates::z(), &[qubit])
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("s", gates::s(), &[qubit])
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("sdg", gates::sdg(), &[qubit])
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("t", gates::t(), &[qubit])
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("tdg", gates::tdg(), &[qubit])
    }

    /// Apply √X gate.
    pub fn sx(&mut self, qubit: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("sx", gates::sx(), &[qubit])
    }

    /// Apply phase shift.
    pub fn phase(&mut self, phi: f64, qubit: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("phase", gates::phase(phi), &[qubit])
    }

    /// Apply RX rotation.
    pub fn rx(&mut self, theta: f64, qubit: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("rx", gates::rx(theta), &[qubit])
    }

    /// Apply RY rotation.
    pub fn ry(&mut self, theta: f64, qubit: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("ry", gates::ry(theta), &[qubit])
    }

    /// Apply RZ rotation.
    pub fn rz(&mut self, theta: f64, qubit: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("rz", gates::rz(theta), &[qubit])
    }

    /// Apply Euler rotation `RZ(ω)·RY(θ)·RZ(φ)`.
    pub fn rot(&mut self, phi: f64, theta: f64, omega: f64, qubit: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("rot", gates::rot(phi, theta, omega), &[qubit])
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT gate.
    pub fn cnot(&mut self, control: usize, target: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("cnot", gates::cnot(), &[control, target])
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: usize, target: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("cz", gates::cz(), &[control, target])
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: usize, q2: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("swap", gates::swap(), &[q1, q2])
    }

    /// Apply controlled RX.
    pub fn crx(&mut self, theta: f64, control: usize, target: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("crx", gates::crx(theta), &[control, target])
    }

    /// Apply controlled RY.
    pub fn cry(&mut self, theta: f64, control: usize, target: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("cry", gates::cry(theta), &[control, target])
    }

    /// Apply controlled RZ.
    pub fn crz(&mut self, theta: f64, control: usize, target: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("crz", gates::crz(theta), &[control, target])
    }

    // =========================================================================
    // Three-qubit gates
    // =========================================================================

    /// Apply Toffoli (CCX) gate.
    pub fn toffoli(&mut self, c1: usize, c2: usize, target: usize) -> CircuitResult<&mut Self> {
        self.apply_matrix("toffoli", gates::toffoli(), &[c1, c2, target])
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Reset the engine, replay every instruction and return the state.
    #[instrument(skip(self), fields(num_qubits = self.num_qubits, gates = self.instructions.len()))]
    pub fn execute(&mut self) -> CircuitResult<Vec<Complex64>> {
        self.engine.reset();
        for inst in &self.instructions {
            self.engine.apply_gate(&inst.matrix, &inst.qubits)?;
        }
        self.applied = Some(self.instructions.len());
        debug!("Executed {} instructions", self.instructions.len());
        Ok(self.engine.statevector())
    }

    /// Bring the engine up to date before a measurement.
    ///
    /// The first call runs the whole program. Afterwards only instructions
    /// recorded since the last run are applied, on top of the collapsed
    /// state.
    fn sync(&mut self) -> CircuitResult<()> {
        match self.applied {
            None => {
                self.execute()?;
            }
            Some(done) => {
                for inst in &self.instructions[done..] {
                    self.engine.apply_gate(&inst.matrix, &inst.qubits)?;
                }
                self.applied = Some(self.instructions.len());
            }
        }
        Ok(())
    }

    /// Measure `qubit`, recording and returning the outcome.
    pub fn measure(&mut self, qubit: usize) -> CircuitResult<u8> {
        self.sync()?;
        let outcome = self.engine.measure(qubit)?;
        self.measurements.push((qubit, outcome));
        Ok(outcome)
    }

    /// [`measure`](Self::measure) drawing from `rng`.
    pub fn measure_with<R: Rng + ?Sized>(&mut self, qubit: usize, rng: &mut R) -> CircuitResult<u8> {
        self.sync()?;
        let outcome = self.engine.measure_with(qubit, rng)?;
        self.measurements.push((qubit, outcome));
        Ok(outcome)
    }

    /// Measure every qubit in increasing order.
    pub fn measure_all(&mut self) -> CircuitResult<Vec<u8>> {
        (0..self.num_qubits).map(|q| self.measure(q)).collect()
    }

    /// Recorded `(qubit, outcome)` pairs in measurement order.
    pub fn measurements(&self) -> &[(usize, u8)] {
        &self.measurements
    }

    /// Basis-state probabilities of the current engine state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.engine.probabilities()
    }

    /// Copy of the current engine state.
    pub fn statevector(&self) -> Vec<Complex64> {
        self.engine.statevector()
    }

    /// Expectation value of a full-register observable on the current state.
    pub fn expectation_value(&self, observable: &GateMatrix) -> CircuitResult<f64> {
        Ok(self.engine.expectation_value(observable)?)
    }

    /// Expectation value of an observable on `qubits`.
    pub fn expectation_value_on(&self, observable: &GateMatrix, qubits: &[usize]) -> CircuitResult<f64> {
        Ok(self.engine.expectation_value_on(observable, qubits)?)
    }

    /// Clear the program and measurement log and reset the engine.
    pub fn reset(&mut self) {
        self.instructions.clear();
        self.measurements.clear();
        self.applied = None;
        self.engine.reset();
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Recorded instructions in order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Get the number of recorded gates.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if no gates are recorded.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of layers when gates on disjoint qubits share a layer.
    pub fn depth(&self) -> usize {
        let mut level = vec![0usize; self.num_qubits];
        let mut depth = 0;
        for inst in &self.instructions {
            let layer = inst.qubits.iter().map(|&q| level[q]).max().unwrap_or(0) + 1;
            for &q in &inst.qubits {
                level[q] = layer;
            }
            depth = depth.max(layer);
        }
        depth
    }

    /// The underlying engine.
    pub fn engine(&self) -> &StatevectorEngine {
        &self.engine
    }
}

impl fmt::Display for QuantumCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QuantumCircuit(num_qubits={}, num_gates={}, depth={})",
            self.num_qubits,
            self.len(),
            self.depth()
        )?;
        for inst in &self.instructions {
            let qubits: Vec<String> = inst.qubits.iter().map(|q| format!("q[{q}]")).collect();
            write!(f, "\n  {} {}", inst.name, qubits.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Debug for QuantumCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuantumCircuit")
            .field("num_qubits", &self.num_qubits)
            .field("instructions", &self.instructions.len())
            .field("measurements", &self.measurements)
            .finish_non_exhaustive()
    }
}
