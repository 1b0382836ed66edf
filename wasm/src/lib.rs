use swmodem_core::Modem;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmModem {
    inner: Modem,
}

#[wasm_bindgen]
impl WasmModem {
    #[wasm_bindgen(constructor)]
    pub fn new(
        sample_rate: f64,
        base_freq: f64,
        freq_step: f64,
        bit_duration: f64,
    ) -> Result<WasmModem, JsValue> {
        Modem::new(sample_rate, base_freq, freq_step, bit_duration)
            .map(|modem| WasmModem { inner: modem })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Modulate binary data into audio samples
    /// Takes a Uint8Array and returns Float32Array of audio samples
    #[wasm_bindgen]
    pub fn modulate(&self, data: &[u8]) -> Vec<f32> {
        self.inner
            .modulate(data)
            .into_iter()
            .map(|s| s as f32)
            .collect()
    }

    /// Demodulate audio samples back to binary data
    /// Takes a Float32Array and returns Uint8Array of decoded data
    #[wasm_bindgen]
    pub fn demodulate(&self, samples: &[f32]) -> Vec<u8> {
        let signal: Vec<f64> = samples.iter().map(|&s| f64::from(s)).collect();
        self.inner.demodulate(&signal)
    }

    #[wasm_bindgen(js_name = samplesPerBit)]
    pub fn samples_per_bit(&self) -> usize {
        self.inner.samples_per_bit()
    }

    #[wasm_bindgen(js_name = sampleRate)]
    pub fn sample_rate(&self) -> f64 {
        self.inner.sample_rate()
    }
}
