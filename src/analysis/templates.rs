//! Canned answers and the two fixed analysis reports.

use super::types::ReportTemplate;

/// Answers for definition-style questions.
pub const SIMPLE_RESPONSES: [&str; 4] = [
    "A resistor is a passive electronic component that limits current flow.",
    "Ohm's law states that V = I × R, where V is voltage, I is current, and R is resistance.",
    "Capacitors store electrical energy in an electric field between two conductive plates.",
    "An inductor is a passive component that stores energy in a magnetic field.",
];

/// Acknowledgements for queries routed to full analysis.
pub const COMPLEX_RESPONSES: [&str; 3] = [
    "I'll analyze this circuit for you. Let me generate the schematic and run simulations.",
    "This requires a detailed circuit analysis. I'll create the circuit diagram and calculate the frequency response.",
    "I'll design this circuit and provide a comprehensive analysis with plots and calculations.",
];

/// Confidence reported by `POST /simple-query`, independent of the query.
pub const SIMPLE_QUERY_CONFIDENCE: f64 = 0.95;

const RC_KEYWORDS: [&str; 4] = ["rc", "resistor", "capacitor", "filter"];
const AMPLIFIER_KEYWORDS: [&str; 4] = ["amplifier", "transistor", "bjt", "gain"];

pub const RC_FILTER_REPORT: &str = r"# RC Low-Pass Filter Analysis

## Circuit Overview
This analysis covers a simple RC low-pass filter circuit with the following components:
- Resistor R1: 1kΩ
- Capacitor C1: 100µF

## Transfer Function
The transfer function of this RC circuit is:

$$H(s) = \frac{1}{1 + sRC}$$

## Key Parameters
| Parameter | Value | Unit |
|-----------|-------|------|
| Cutoff Frequency | 1.59 | kHz |
| DC Gain | 0 | dB |
| Phase Margin | 90 | degrees |

## Frequency Response
The circuit exhibits typical low-pass filter behavior:
- **Pass Band**: Frequencies below 1.59 kHz pass with minimal attenuation
- **Stop Band**: Frequencies above cutoff are attenuated at -20dB/decade
- **3dB Point**: At 1.59 kHz, the output is 3dB below the input

## Time Domain Response
For a step input, the output follows:
$$v_{out}(t) = V_{in}(1 - e^{-t/RC})u(t)$$

## Recommendations
1. Use precision components for critical applications
2. Consider temperature compensation for improved stability
3. Add buffer amplifiers to prevent loading effects
";

pub const AMPLIFIER_REPORT: &str = r"# BJT Amplifier Circuit Analysis

## Circuit Configuration
Common emitter amplifier with the following specifications:
- Transistor: 2N2222 NPN BJT
- Collector Resistor: 2.2kΩ
- Base Bias Resistors: 47kΩ, 10kΩ
- Emitter Resistor: 1kΩ

## DC Operating Point
| Parameter | Value | Unit |
|-----------|-------|------|
| Collector Current | 2.3 | mA |
| Base Current | 23 | µA |
| VCE | 4.9 | V |
| Beta (hFE) | 100 | - |

## AC Analysis
- **Voltage Gain**: -47 dB
- **Input Impedance**: 2.1 kΩ
- **Output Impedance**: 2.2 kΩ
- **Bandwidth**: 10 Hz to 100 kHz

## Performance Characteristics
The amplifier provides good voltage gain with moderate input impedance. The frequency response shows:
- Flat gain in the mid-band region
- High-frequency rolloff due to transistor capacitances
- Low-frequency rolloff due to coupling capacitors
";

/// Pick the report for a query. RC keywords take precedence; RC is
/// also the fallback.
pub fn select_report(query: &str) -> ReportTemplate {
    let lower = query.to_lowercase();

    if RC_KEYWORDS.iter().any(|k| lower.contains(k)) {
        ReportTemplate::RcFilter
    } else if AMPLIFIER_KEYWORDS.iter().any(|k| lower.contains(k)) {
        ReportTemplate::Amplifier
    } else {
        ReportTemplate::RcFilter
    }
}

impl ReportTemplate {
    pub fn body(self) -> &'static str {
        match self {
            Self::RcFilter => RC_FILTER_REPORT,
            Self::Amplifier => AMPLIFIER_REPORT,
        }
    }
}
