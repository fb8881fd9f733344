// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use podkit_core::{Config, Error, TextBuffer, TextSerializer};
use podkit_derive::PodObject;
use tests::*;

#[test]
fn test_two_fields_tokens() {
    let serializer = TextSerializer::<TwoFields>::new().unwrap();
    let value = TwoFields {
        field1: 'a',
        field2: 42,
    };
    assert_eq!(serializer.to_text(&value).unwrap(), "'a' 42 ");

    let mut buffer = TextBuffer::new();
    serializer.serialize(&value, &mut buffer).unwrap();
    let mut out = TwoFields {
        field1: 'b',
        field2: 0,
    };
    serializer.deserialize(&mut out, &mut buffer).unwrap();
    assert_eq!(out, value);
    assert!(buffer.is_empty());
}

#[test]
fn test_strings_are_quoted_and_escaped() {
    let serializer = TextSerializer::<WithText>::new().unwrap();
    let value = WithText {
        field1: 'q',
        field2: "he said \"hi\"\n".to_string(),
        field3: 2.5,
    };
    let text = serializer.to_text(&value).unwrap();
    assert_eq!(text, "'q' \"he said \\\"hi\\\"\\n\" 2.5 ");
    let mut buffer = TextBuffer::from(text);
    assert_eq!(serializer.read(&mut buffer).unwrap(), value);
    assert!(buffer.is_empty());
}

#[test]
fn test_enums_are_written_as_integers() {
    let serializer = TextSerializer::<ThreeFieldsWithEnum>::new().unwrap();
    let value = ThreeFieldsWithEnum {
        field1: 'x',
        field2: Wide::Second,
        field3: Sparse::High,
    };
    assert_eq!(serializer.to_text(&value).unwrap(), "'x' 1 40 ");
    let mut buffer = TextBuffer::from("'x' 0 -3 ");
    assert_eq!(
        serializer.read(&mut buffer).unwrap(),
        ThreeFieldsWithEnum {
            field1: 'x',
            field2: Wide::First,
            field3: Sparse::Low,
        }
    );
}

#[test]
fn test_bools() {
    #[derive(PodObject, Clone, Debug, PartialEq)]
    struct Switches {
        pub on: bool,
        pub off: bool,
    }

    let serializer = TextSerializer::<Switches>::new().unwrap();
    let value = Switches {
        on: true,
        off: false,
    };
    assert_eq!(serializer.to_text(&value).unwrap(), "1 0 ");
    let mut buffer = TextBuffer::from("1 true ");
    assert!(matches!(
        serializer.read(&mut buffer).unwrap_err(),
        Error::InvalidData(_)
    ));
}

#[test]
fn test_repeated_nested_round_trip() {
    let serializer = TextSerializer::<TwoFieldsTwoLevelsOfNestedStructs>::new().unwrap();
    let value = two_levels();
    let mut buffer = TextBuffer::new();
    for _ in 0..3 {
        serializer.serialize(&value, &mut buffer).unwrap();
    }
    for _ in 0..3 {
        assert_eq!(serializer.read(&mut buffer).unwrap(), value);
    }
    assert!(buffer.is_empty());
}

#[test]
fn test_floats_use_shortest_form() {
    #[derive(PodObject, Clone, Debug, PartialEq)]
    struct Floats {
        pub small: f32,
        pub large: f64,
        pub tenth: f64,
    }

    let serializer = TextSerializer::<Floats>::new().unwrap();
    let value = Floats {
        small: 0.1,
        large: 1e300,
        tenth: 0.1,
    };
    let text = serializer.to_text(&value).unwrap();
    assert!(text.starts_with("0.1 "));
    assert!(text.ends_with(" 0.1 "));
    assert_eq!(serializer.read(&mut TextBuffer::from(text)).unwrap(), value);
}

#[test]
fn test_signed_zero_and_infinities() {
    #[derive(PodObject, Clone, Copy, Debug)]
    struct Edges {
        pub zero: f64,
        pub up: f64,
        pub down: f32,
        pub missing: f64,
    }

    let serializer = TextSerializer::<Edges>::new().unwrap();
    let value = Edges {
        zero: -0.0,
        up: f64::INFINITY,
        down: f32::NEG_INFINITY,
        missing: f64::NAN,
    };
    let text = serializer.to_text(&value).unwrap();
    assert_eq!(text, "-0 inf -inf NaN ");

    let back = serializer.read(&mut TextBuffer::from(text)).unwrap();
    assert_eq!(back.zero.to_bits(), (-0.0f64).to_bits());
    assert_eq!(back.up, f64::INFINITY);
    assert_eq!(back.down, f32::NEG_INFINITY);
    assert!(back.missing.is_nan());
}

#[test]
fn test_custom_separator() {
    let config = Config::new().separator(',').unwrap();
    let serializer = TextSerializer::<WithText>::new()
        .unwrap()
        .with_config(config);
    let value = WithText {
        field1: ',',
        field2: "a b, c".to_string(),
        field3: -1.0,
    };
    let text = serializer.to_text(&value).unwrap();
    assert_eq!(text, "',',\"a b, c\",-1,");
    assert_eq!(serializer.read(&mut TextBuffer::from(text)).unwrap(), value);
}

#[test]
fn test_invalid_token_leaves_target_untouched() {
    let serializer = TextSerializer::<TwoFields>::new().unwrap();
    let mut buffer = TextBuffer::from("'a' nope ");
    let mut target = TwoFields {
        field1: 'k',
        field2: 5,
    };
    let err = serializer.deserialize(&mut target, &mut buffer).unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));
    assert_eq!(
        target,
        TwoFields {
            field1: 'k',
            field2: 5
        }
    );
    assert_eq!(buffer.cursor(), 0);
}

#[test]
fn test_underrun() {
    let serializer = TextSerializer::<TwoFields>::new().unwrap();
    let mut buffer = TextBuffer::from("'a' ");
    let err = serializer.read(&mut buffer).unwrap_err();
    assert!(err.is_buffer_underrun());
    assert_eq!(buffer.cursor(), 0);
}
