//! Field schema of the "Add Product" form
//!
//! Five tabs, in the order their triggers are shown. Field names are the keys
//! of the submitted record.

use crate::shared::metadata::{FieldDescriptor, FieldGroup, FormSchemaRegistry, TabDefinition};

pub const TAB_PRODUCT_IDENTITY: &str = "productIdentity";
pub const TAB_DESCRIPTION: &str = "description";
pub const TAB_PRODUCT_DETAILS: &str = "productDetails";
pub const TAB_OFFER: &str = "offer";
pub const TAB_SAFETY_AND_COMPLIANCE: &str = "safetyAndCompliance";

// ============================================================================
// Product Identity
// ============================================================================

const IDENTITY_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::required(
        "itemName",
        "Item Name",
        "Example: Adidas Blue Sneakers",
        "Provide a title for the item that may be customer facing",
    ),
    FieldDescriptor::required(
        "productType",
        "Product Type",
        "Enter product type",
        "Select the appropriate product type that best suits the item",
    ),
    FieldDescriptor::required(
        "recommendedBrowserNode",
        "Recommended Browser Node",
        "-Select-",
        "Indicate the browse node or section of the Amazon website where the product will be assigned.",
    ),
    FieldDescriptor::required(
        "brandName",
        "Brand Name",
        "Example: Adidas",
        "Provide the brand name of the product",
    )
    .with_not_applicable("Does not have a brand name"),
    FieldDescriptor::optional(
        "externalProductId",
        "External Product ID",
        "Example: 714532191586",
        "Provide the external ID (barcode) type",
    )
    .with_not_applicable("Does not have an external product ID"),
];

const PRODUCT_IDENTITY_GROUPS: &[FieldGroup] = &[FieldGroup::plain(IDENTITY_FIELDS)];

// ============================================================================
// Description
// ============================================================================

const DESCRIPTION_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::required(
        "shortDescription",
        "Short Description",
        "Example: This Summer, boots by Jette made from high quality suede leather are real gems. They visually highlight the craftmanship",
        "Provide a text description of the product. This information will appear in paragraph form on the detail page of your product. Include unique product features, product line details, and product specifications. Do not use all caps.",
    ),
    FieldDescriptor::required(
        "bulletPoints",
        "Bullet Points",
        "Enter bullet points",
        "Brief descriptive text, called out via a bullet point, regarding a specific aspect of the product. These display directly under or next to your product photo, it is useful to put interesting information in these fields. Do NOT use all caps or abbreviations. Please do NOT use for fabric content, care instructions or country as these are populated in different fields.",
    ),
    FieldDescriptor::required(
        "images",
        "Images",
        "Enter image URL",
        "Provide a URL for the product image. The image must be in JPG or PNG format, 1000x1000 pixels, and 1MB or smaller.",
    ),
];

const DESCRIPTION_GROUPS: &[FieldGroup] = &[FieldGroup::plain(DESCRIPTION_FIELDS)];

// ============================================================================
// Product Details
// ============================================================================

const DETAILS_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::required(
        "manufacturer",
        "Manufacturer",
        "Example: Nike, Procter & Gamble",
        "Provide the company that manufactures the product.",
    ),
    FieldDescriptor::optional(
        "genericKeywords",
        "Generic Keywords",
        "Example: Water sport shoes; Derek Rose; Electric; Wi-Fi; Banana",
        "Provide any terms that may be relevant to customer searches. No repetition, no competitor brand names or ASINs.",
    ),
    FieldDescriptor::optional(
        "style",
        "Style",
        "Example: Art Deco",
        "Provide the style of the product. Style refers to the aesthetic choices of a person or a group of people. It describes the distinctive visual representation of a product",
    ),
    FieldDescriptor::required(
        "departmentName",
        "Department Name",
        "Example: Baby Boys, Baby Girls",
        "Provide the department name of the product. This is the name of the department where the product is sold.",
    ),
    FieldDescriptor::optional(
        "targetGender",
        "Target Gender",
        "Example: Female",
        "Provide the target gender for the product",
    ),
    FieldDescriptor::optional(
        "ageRangeDescription",
        "Age Range Description",
        "Example: Baby",
        "Specify an appropriate age range description for the item",
    ),
    FieldDescriptor::required(
        "material",
        "Material",
        "Example: Plastic",
        "Specify the primary materials used for manufacturing the item",
    ),
    FieldDescriptor::optional(
        "numberOfItems",
        "Number of Items",
        "Example: 5",
        "Provide the total number of identical items in the selling unit to the customer",
    ),
    FieldDescriptor::required(
        "itemTypeName",
        "Item Type Name",
        "Example: Anklets, Bangle Bracelets",
        "Provide the name of the item type",
    ),
    FieldDescriptor::optional(
        "subjectCharacter",
        "Subject Character",
        "Example: Batman",
        "Provide the primary character the item represents",
    ),
    FieldDescriptor::required(
        "color",
        "Color",
        "Example: Cranberry",
        "Provide the color of the product",
    ),
    FieldDescriptor::required(
        "size",
        "Size",
        "Example: Extra Large",
        "Provide the size of the item",
    ),
    FieldDescriptor::optional(
        "metalType",
        "Metal Type",
        "Example: Gold",
        "Specify the type of metal used for the item",
    ),
];

const STONE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::required(
        "stoneId",
        "Stone ID",
        "Example: 15",
        "Provide a unique id to number/identify each unique stone type",
    ),
    FieldDescriptor::required(
        "stoneType",
        "Stone Type",
        "Example: Diamond",
        "Provide the type of the stone",
    ),
    FieldDescriptor::required(
        "numberOfStones",
        "Number of Stones",
        "Example: 1,3",
        "Enter the number of stones of this stone type.",
    ),
    FieldDescriptor::required(
        "stoneCreationMethod",
        "Stone Creation Method",
        "Example: Synthetic, Simulated",
        "Describe the method of the stone creation",
    ),
    FieldDescriptor::required(
        "stoneTreatmentMethod",
        "Stone Treatment Method",
        "Example: None, Polished, Cut",
        "Provide the treatment method that has been applied to the stone",
    ),
];

const MANUFACTURER_CONTACT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::required(
        "manufacturerContactInformation",
        "Manufacturer Contact Information",
        "Example: Manufacturer Name Ltd, Street No. 24/4, New Delhi, India - 110011, Contact: +91-801-000-2400, service@manufacturer.com",
        "Provide the contact information (including address, zipcode) for the product's manufacturer",
    ),
];

const UNIT_COUNT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::required(
        "unitCount",
        "Unit Count",
        "Example: 72.0",
        "For products that are consumed by volume, weight, linear dimension, etc., provide the net quantity that would be shipped to a customer who orders one ASIN (e.g. 12 pack of 6 floz. bottles of water = 72, vs. a single 2 liter bottle = 2). For products consumed as individual units, provide the total number of units (pack of 12 pens = 12). For packed assortments of non-identical items, enter 1",
    ),
];

const EXTERNAL_INFORMATION_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::required(
        "externalProductInformationEntity",
        "External Product Information Entity",
        "Example: HSN Code",
        "Store external product entity information. HSN Code for India marketplace.",
    ),
    FieldDescriptor::required(
        "externalProductInformation",
        "External Product Information",
        "Example: QUJ85, 610510, 61051010",
        "Store external product information for a given key. For example 6 to 8-digit HSN for India marketplace.",
    ),
];

const IMPORTER_PACKER_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::required(
        "importerContactInformation",
        "Importer Contact Information",
        "Example: Importer Name Ltd, Street No. 24/4, New Delhi, India - 110011, Contact: +91-801-000-2400, service@importer.com",
        "Provide the contact information (including address, zipcode) of the importer of the product. The Importer is the person who brings the product into a country for sale",
    ),
    FieldDescriptor::required(
        "packerContactInformation",
        "Packer Contact Information",
        "Example: Packer Name Ltd, Street No. 24/4, New Delhi, India - 110011, Contact: +91-801-000-2400, service@packer.com",
        "Provide the contact information (including address, zipcode) for the packer of the product. The packer is the person who does the primary pre-packaging of the product when it is not the manufacturer.",
    ),
];

const PRODUCT_DETAILS_GROUPS: &[FieldGroup] = &[
    FieldGroup::plain(DETAILS_FIELDS),
    FieldGroup::headed("Stones", STONE_FIELDS),
    FieldGroup::plain(MANUFACTURER_CONTACT_FIELDS),
    FieldGroup::headed("Unit Count", UNIT_COUNT_FIELDS),
    FieldGroup::headed("External Product Information", EXTERNAL_INFORMATION_FIELDS),
    FieldGroup::plain(IMPORTER_PACKER_FIELDS),
];

// ============================================================================
// Offer
// ============================================================================

const OFFER_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::optional(
        "sellerSKU",
        "Seller SKU",
        "Example: ABC123",
        "This attribute indicates the SKU number as assigned by the contributor",
    ),
    FieldDescriptor::required(
        "quantity",
        "Quantity",
        "Example: 152",
        "Enter the quantity of the item you are making available for sale. This is your current inventory commitment (as a whole number)",
    ),
    FieldDescriptor::optional(
        "handlingTime",
        "Handling Time",
        "Example: 5",
        "Provide the time, in days, between when you receive an order for an item and when you can ship the item",
    ),
    FieldDescriptor::optional(
        "restockDate",
        "Restock Date",
        "DD/MM/YYYY",
        "Date that product will be restocked",
    ),
    FieldDescriptor::optional(
        "minimumAdvertisedPrice",
        "Minimum Advertised Price",
        "Example: 259.99",
        "Provide the minimum advertised price",
    ),
    FieldDescriptor::required(
        "yourPrice",
        "Your Price",
        "Example: 9.00",
        "Provide base price of the item at which it is being offered to the intended buyer segment",
    ),
    FieldDescriptor::required(
        "maximumRetailPrice",
        "Maximum Retail Price",
        "Example: 195",
        "Provide the maximum retail price that is physically printed on pre-packaged products by manufacturer according to legal metrology act. This is the maximum price that seller can charge a customer. This is only applicable to IN Marketplace.",
    ),
    FieldDescriptor::optional(
        "salePrice",
        "Sale Price",
        "Example: 219.99",
        "The price at which you offer the product for sale.",
    ),
    FieldDescriptor::optional(
        "offeringConditionType",
        "Offering Condition Type",
        "Example: New",
        "Provide the actual condition type of the product",
    ),
];

const FULFILLMENT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::required(
        "fulfillmentChannel",
        "Fulfillment Channel",
        "Example: Amazon.in",
        "Provide the fulfillment channel of the product",
    ),
];

const ITEM_DIMENSION_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::required(
        "itemLength",
        "Item Length",
        "Example: 10",
        "Provide the item length as a numeric value.",
    ),
    FieldDescriptor::required(
        "itemLengthUnit",
        "Item Length Unit",
        "Example: Centimetres",
        "Select the unit of measure for Item Length. If a value is provided for Item Length, you must also enter the corresponding unit.",
    ),
    FieldDescriptor::required(
        "itemWidth",
        "Item Width",
        "Example: 10",
        "Provide the item width as a numeric value.",
    ),
    FieldDescriptor::required(
        "itemWidthUnit",
        "Item Width Unit",
        "Example: Centimetres",
        "Select the unit of measure for Item Width. If a value is provided for Item Width, you must also enter the corresponding unit.",
    ),
    FieldDescriptor::required(
        "itemHeight",
        "Item Height",
        "Example: 10",
        "Provide the item height as a numeric value.",
    ),
    FieldDescriptor::required(
        "itemHeightUnit",
        "Item Height Unit",
        "Example: Centimetres",
        "Select the unit of measure for Item Height. If a value is provided for Item Height, you must also enter the corresponding unit.",
    ),
];

const PACKAGE_DIMENSION_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::required(
        "itemPackageLength",
        "Item Package Length",
        "Example: 10",
        "Provide the item package length as a numeric value.",
    ),
    FieldDescriptor::required(
        "itemPackageLengthUnit",
        "Item Package Length Unit",
        "Example: Centimetres",
        "Select the unit of measure for Item Package Length. If a value is provided for Item Package Length, you must also enter the corresponding unit.",
    ),
    FieldDescriptor::required(
        "itemPackageWidth",
        "Item Package Width",
        "Example: 10",
        "Provide the item package width as a numeric value.",
    ),
    FieldDescriptor::required(
        "itemPackageWidthUnit",
        "Item Package Width Unit",
        "Example: Centimetres",
        "Select the unit of measure for Item Package Width. If a value is provided for Item Package Width, you must also enter the corresponding unit.",
    ),
    FieldDescriptor::required(
        "itemPackageHeight",
        "Item Package Height",
        "Example: 10",
        "Provide the item package height as a numeric value.",
    ),
    FieldDescriptor::required(
        "itemPackageHeightUnit",
        "Item Package Height Unit",
        "Example: Centimetres",
        "Select the unit of measure for Item Package Height. If a value is provided for Item Package Height, you must also enter the corresponding unit.",
    ),
];

const PACKAGE_WEIGHT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::required(
        "itemPackageWeight",
        "Item Package Weight",
        "Example: 10",
        "Provide the item package weight as a numeric value.",
    ),
    FieldDescriptor::required(
        "itemPackageWeightUnit",
        "Item Package Weight Unit",
        "Example: Kilograms",
        "Select the unit of measure for Item Package Weight. If a value is provided for Item Package Weight, you must also enter the corresponding unit.",
    ),
];

const OFFER_GROUPS: &[FieldGroup] = &[
    FieldGroup::plain(OFFER_FIELDS),
    FieldGroup::plain(FULFILLMENT_FIELDS),
    FieldGroup::headed("Item Dimensions", ITEM_DIMENSION_FIELDS),
    FieldGroup::headed("Item Package Dimensions", PACKAGE_DIMENSION_FIELDS),
    FieldGroup::headed("Item Package Weight", PACKAGE_WEIGHT_FIELDS),
];

// ============================================================================
// Safety and Compliance
// ============================================================================

const SAFETY_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::required(
        "countryOfOrigin",
        "Country/Region of Origin",
        "Example: India",
        "Provide the country/region of origin for the product",
    ),
    FieldDescriptor::required(
        "areBatteriesRequired",
        "Are Batteries Required?",
        "Example: Yes",
        "Select YES if batteries are required to power the item (or if the item is a battery) or NO if they are not. Please note that an internal rechargeable battery is also considered a battery",
    ),
    FieldDescriptor::required(
        "dangerousGoodsRegulation",
        "Dangerous Goods Regulation",
        "Example: GHS, Storage, Transportation",
        "If the product is a Dangerous Good or Hazardous Material, Substance or Waste that is regulated for transportation, storage, and/or waste select from the list of valid values",
    ),
];

const ITEM_WEIGHT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::required(
        "itemWeight",
        "Item Weight",
        "Example: 10",
        "Provide the item weight numeric value (not including the packaging)",
    ),
    FieldDescriptor::required(
        "itemWeightUnit",
        "Item Weight Unit",
        "Example: Kilograms",
        "Provide unit for item weight",
    ),
];

const SAFETY_GROUPS: &[FieldGroup] = &[
    FieldGroup::plain(SAFETY_FIELDS),
    FieldGroup::headed("Item Weight", ITEM_WEIGHT_FIELDS),
];

// ============================================================================
// Registry
// ============================================================================

const TABS: &[TabDefinition] = &[
    TabDefinition {
        key: TAB_PRODUCT_IDENTITY,
        label: "Product Identity",
        groups: PRODUCT_IDENTITY_GROUPS,
    },
    TabDefinition {
        key: TAB_DESCRIPTION,
        label: "Description",
        groups: DESCRIPTION_GROUPS,
    },
    TabDefinition {
        key: TAB_PRODUCT_DETAILS,
        label: "Product Details",
        groups: PRODUCT_DETAILS_GROUPS,
    },
    TabDefinition {
        key: TAB_OFFER,
        label: "Offer",
        groups: OFFER_GROUPS,
    },
    TabDefinition {
        key: TAB_SAFETY_AND_COMPLIANCE,
        label: "Safety and Compliance",
        groups: SAFETY_GROUPS,
    },
];

/// Registry of the "Add Product" form
pub const CATALOGUE_SCHEMA: FormSchemaRegistry = FormSchemaRegistry::new(TABS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_are_unique() {
        assert!(CATALOGUE_SCHEMA.duplicate_field_names().is_empty());
        assert_eq!(CATALOGUE_SCHEMA.fields().count(), 61);
    }

    #[test]
    fn test_tab_order() {
        let keys: Vec<_> = CATALOGUE_SCHEMA.list_tabs().into_iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec![
                TAB_PRODUCT_IDENTITY,
                TAB_DESCRIPTION,
                TAB_PRODUCT_DETAILS,
                TAB_OFFER,
                TAB_SAFETY_AND_COMPLIANCE,
            ]
        );
        assert_eq!(
            CATALOGUE_SCHEMA.get_tab(TAB_SAFETY_AND_COMPLIANCE).unwrap().label,
            "Safety and Compliance"
        );
    }

    #[test]
    fn test_not_applicable_fields() {
        let names: Vec<_> = CATALOGUE_SCHEMA
            .fields()
            .filter(|field| field.supports_not_applicable())
            .map(|field| field.name)
            .collect();
        assert_eq!(names, vec!["brandName", "externalProductId"]);
    }

    #[test]
    fn test_group_headings() {
        let headings: Vec<_> = CATALOGUE_SCHEMA
            .tabs()
            .iter()
            .flat_map(|tab| tab.groups.iter().filter_map(|group| group.heading))
            .collect();
        assert_eq!(
            headings,
            vec![
                "Stones",
                "Unit Count",
                "External Product Information",
                "Item Dimensions",
                "Item Package Dimensions",
                "Item Package Weight",
                "Item Weight",
            ]
        );
    }

    #[test]
    fn test_field_owner_tabs() {
        assert_eq!(CATALOGUE_SCHEMA.tab_of_field("itemName"), Some(TAB_PRODUCT_IDENTITY));
        assert_eq!(CATALOGUE_SCHEMA.tab_of_field("stoneType"), Some(TAB_PRODUCT_DETAILS));
        assert_eq!(CATALOGUE_SCHEMA.tab_of_field("yourPrice"), Some(TAB_OFFER));
        assert_eq!(
            CATALOGUE_SCHEMA.tab_of_field("itemWeightUnit"),
            Some(TAB_SAFETY_AND_COMPLIANCE)
        );
    }
}
