use alloy::sol;
use serde_json::Value;

use crate::errors::SignerError;

sol! {
    #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    struct OrderInfo {
        string SubaccountId;
        string FeeRecipient;
        string Price;
        string Quantity;
    }

    #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    struct SpotLimitOrder {
        string MarketId;
        OrderInfo OrderInfo;
        string OrderType;
        string TriggerPrice;
        string Salt;
    }
}

impl SpotLimitOrder {
    /// The 24 @ 137 buy order the signer ships with.
    pub fn buy_24_at_137() -> Self {
        SpotLimitOrder {
            MarketId: "0xb0057716d5917badaf911b193b12b910811c1497b5bada8d7711f758981c3773"
                .to_string(),
            OrderInfo: OrderInfo {
                SubaccountId: "90f8bf6a479f320ead074411a4b0e7944ea8c9c1000000000000000000000001"
                    .to_string(),
                FeeRecipient: "inj1dzqd00lfd4y4qy2pxa0dsdwzfnmsu27hgttswz".to_string(),
                Price: "137.000000000000000000".to_string(),
                Quantity: "24.000000000000000000".to_string(),
            },
            OrderType: "BUY".to_string(),
            TriggerPrice: "1.000000000000000000".to_string(),
            Salt: "12".to_string(),
        }
    }

    /// Reads an order back out of a typed-data `message` object.
    pub fn from_message(message: &Value) -> Result<Self, SignerError> {
        serde_json::from_value(message.clone())
            .map_err(|e| SignerError::InvalidTypedData(e.to_string()))
    }
}
